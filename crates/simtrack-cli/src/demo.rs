//! Demonstration profiles and the sessions run for them at startup.

use std::io::Write;

use anyhow::{Context, Result};

use simtrack_core::{MetricSource, Profile, SessionGenerator};

/// Program and graduation year shared by the demo residents.
const PROGRAM: &str = "Medicine";
const GRADUATION_YEAR: i32 = 2024;

/// `(profile index, module, complexity)`, run in this order.
pub const DEMO_SESSIONS: [(usize, &str, i32); 4] = [
    (0, "Basic Suturing", 3),
    (0, "Vessel Dissection", 4),
    (1, "Tumor Resection", 5),
    (1, "Advanced Suturing", 3),
];

pub fn profiles() -> Vec<Profile> {
    vec![
        Profile::new("Gabriel Machado", PROGRAM, GRADUATION_YEAR),
        Profile::new("Camila Padalino", PROGRAM, GRADUATION_YEAR),
    ]
}

pub fn run_sessions<S: MetricSource>(
    profiles: &mut [Profile],
    generator: &mut SessionGenerator<S>,
    out: &mut dyn Write,
) -> Result<()> {
    for (idx, module, complexity) in DEMO_SESSIONS {
        let profile = profiles
            .get_mut(idx)
            .with_context(|| format!("no demo profile at index {idx}"))?;
        generator
            .run_module(profile, module, complexity, out)
            .with_context(|| format!("failed to run module '{module}'"))?;
    }
    Ok(())
}
