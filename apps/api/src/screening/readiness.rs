/// Career readiness: 10 points per extracted skill, saturating at 100.
pub fn career_readiness(skills: &[String]) -> u32 {
    let count = u32::try_from(skills.len()).unwrap_or(u32::MAX);
    count.saturating_mul(10).min(100)
}
