//! Interactive menu shell.
//!
//! Thin loop: print the menu, read one token, dispatch to the model or the
//! scoring engine, print the result, repeat until quit or end-of-input.
//! Validation errors are printed and the loop continues; I/O errors abort.

pub mod demo;

use std::io::{BufRead, Write};

use crate::app::AppContext;
use crate::cli::output::HumanLayout;
use crate::error::{CaError, Result};
use crate::model::{MAX_LEVEL, Profile};
use crate::scoring;

const BANNER: &str = "=== Career Advisor ===";

const MENU: &str = "\
Choose an option:
  [1] Create profile
  [2] Add skill to profile
  [3] Analyze profile
  [4] Recommend careers
  [5] List careers
  [6] List profiles
  [0] Quit";

pub struct Shell<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn run(&mut self, ctx: &mut AppContext) -> Result<()> {
        writeln!(self.output, "{BANNER}")?;
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "{MENU}")?;
            let Some(choice) = self.prompt("Option: ")? else {
                break; // end of input
            };
            let outcome = match choice.as_str() {
                "1" => self.create_profile(ctx),
                "2" => self.add_skill(ctx),
                "3" => self.analyze(ctx),
                "4" => self.recommend(ctx),
                "5" => self.list_careers(ctx),
                "6" => self.list_profiles(ctx),
                "0" => {
                    writeln!(self.output, "Goodbye!")?;
                    break;
                }
                other => Err(CaError::validation(format!(
                    "invalid selection '{other}', choose 0-6"
                ))),
            };
            match outcome {
                Ok(()) => {}
                Err(err @ CaError::Validation(_)) => {
                    writeln!(self.output, "Error: {err}")?;
                }
                Err(err) => return Err(err),
            }
        }
        Ok(())
    }

    fn create_profile(&mut self, ctx: &mut AppContext) -> Result<()> {
        let name = self.require("Profile name: ")?;
        let profile = Profile::new(name)?;
        writeln!(self.output, "Profile '{}' created.", profile.name())?;
        ctx.roster.insert(profile);
        Ok(())
    }

    fn add_skill(&mut self, ctx: &mut AppContext) -> Result<()> {
        let profile_name = self.require("Profile name: ")?;
        let skill = self.require("Skill name: ")?;
        let level_raw = self.require(&format!("Proficiency (0-{MAX_LEVEL}): "))?;
        let level: u8 = level_raw.parse().map_err(|_| {
            CaError::validation(format!("'{level_raw}' is not a valid proficiency level"))
        })?;

        let display_name = if let Some(profile) = ctx.roster.get_mut(&profile_name) {
            profile.add_skill(&skill, level)?;
            profile.name().to_string()
        } else {
            // Profiles spring into existence on first skill, but only once
            // the skill itself validates; a failed add must not leave an
            // empty profile behind.
            let mut profile = Profile::new(profile_name.clone())?;
            profile.add_skill(&skill, level)?;
            let name = profile.name().to_string();
            ctx.roster.insert(profile);
            name
        };
        writeln!(
            self.output,
            "Skill '{}' set to {level} on profile '{display_name}'.",
            skill.trim().to_lowercase(),
        )?;
        Ok(())
    }

    fn analyze(&mut self, ctx: &mut AppContext) -> Result<()> {
        let profile_name = self.require("Profile name: ")?;
        let Some(profile) = ctx.roster.get(&profile_name) else {
            return Err(CaError::validation(format!(
                "unknown profile '{profile_name}', create it first"
            )));
        };
        let results = scoring::analyze(profile, &ctx.catalog);

        let mut layout = HumanLayout::new();
        layout.section(&format!("Compatibility for {}", profile.name()));
        for (rank, rec) in results.iter().enumerate() {
            layout.ranked(rank + 1, &rec.career, rec.score);
            for hint in scoring::improvement_hints(rec) {
                layout.detail(&hint);
            }
        }
        writeln!(self.output, "{}", layout.build())?;
        Ok(())
    }

    fn recommend(&mut self, ctx: &mut AppContext) -> Result<()> {
        let profile_name = self.require("Profile name: ")?;
        let Some(profile) = ctx.roster.get(&profile_name) else {
            return Err(CaError::validation(format!(
                "unknown profile '{profile_name}', create it first"
            )));
        };
        let picks = scoring::recommend(profile, &ctx.catalog, ctx.top_n)?;

        let mut layout = HumanLayout::new();
        layout.section(&format!(
            "Top {} careers for {}",
            picks.len(),
            profile.name()
        ));
        for (rank, rec) in picks.iter().enumerate() {
            layout.ranked(rank + 1, &rec.career, rec.score);
            for hint in scoring::improvement_hints(rec) {
                layout.detail(&hint);
            }
        }
        writeln!(self.output, "{}", layout.build())?;
        Ok(())
    }

    fn list_careers(&mut self, ctx: &mut AppContext) -> Result<()> {
        let mut layout = HumanLayout::new();
        layout.section("Career catalog");
        for career in ctx.catalog.careers() {
            let requirements = career
                .requirements()
                .map(|(skill, weight)| format!("{skill} ({weight:.1})"))
                .collect::<Vec<_>>()
                .join(", ");
            layout.bullet(&format!("{}: {requirements}", career.name()));
        }
        writeln!(self.output, "{}", layout.build())?;
        Ok(())
    }

    fn list_profiles(&mut self, ctx: &mut AppContext) -> Result<()> {
        if ctx.roster.is_empty() {
            writeln!(self.output, "No profiles yet.")?;
            return Ok(());
        }
        let mut layout = HumanLayout::new();
        layout.section("Profiles");
        for name in ctx.roster.names() {
            layout.bullet(name);
        }
        writeln!(self.output, "{}", layout.build())?;
        Ok(())
    }

    /// Prompt and read one trimmed line; `None` on end-of-input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// As [`Self::prompt`], but end-of-input mid-dialog is a validation error.
    fn require(&mut self, text: &str) -> Result<String> {
        self.prompt(text)?
            .ok_or_else(|| CaError::validation("unexpected end of input"))
    }
}
