//! Scripted demonstration with preset data.
//!
//! Validation errors are fatal here: scripted input is assumed well-formed,
//! so any failure aborts the run with a non-zero exit.

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, emit_human, emit_robot, robot_ok};
use crate::error::Result;
use crate::model::Profile;
use crate::scoring;

pub fn run(ctx: &AppContext) -> Result<()> {
    let mut profile = Profile::new("Marina")?;
    profile.add_skill("python", 4)?;
    profile.add_skill("statistics", 3)?;
    profile.add_skill("communication", 3)?;

    let analysis = scoring::analyze(&profile, &ctx.catalog);
    let picks = scoring::recommend(&profile, &ctx.catalog, ctx.top_n)?;

    if ctx.robot_mode {
        let payload = serde_json::json!({
            "profile": profile,
            "analysis": analysis,
            "recommendations": picks,
        });
        return emit_robot(&robot_ok(payload));
    }

    let mut layout = HumanLayout::new();
    layout
        .title("Career Advisor demonstration")
        .section("Profile")
        .kv("Name", profile.name());
    for (skill, level) in profile.skills() {
        layout.bullet(&format!("{skill}: level {level}"));
    }
    layout.blank().section("Compatibility");
    for (rank, rec) in analysis.iter().enumerate() {
        layout.ranked(rank + 1, &rec.career, rec.score);
    }
    layout
        .blank()
        .section(&format!("Top {} recommendations", picks.len()));
    for (rank, rec) in picks.iter().enumerate() {
        layout.ranked(rank + 1, &rec.career, rec.score);
        for hint in scoring::improvement_hints(rec) {
            layout.detail(&hint);
        }
    }
    emit_human(layout);
    Ok(())
}
