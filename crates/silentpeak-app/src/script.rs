//! Scripted sessions: one JSON step per line.
//!
//! ```text
//! {"step":"command","command":{"type":"StartMission","base":1,"sub_level":1}}
//! {"step":"wait","secs":2.5}
//! {"step":"command","command":{"type":"Fire","target":0,"headshot":true}}
//! ```
//!
//! Blank lines and lines starting with `#` are skipped.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use silentpeak_core::commands::PlayerCommand;

use crate::state::GameLoopCommand;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum ScriptStep {
    Command { command: PlayerCommand },
    Wait { secs: f64 },
}

impl From<ScriptStep> for GameLoopCommand {
    fn from(step: ScriptStep) -> Self {
        match step {
            ScriptStep::Command { command } => GameLoopCommand::Player(command),
            ScriptStep::Wait { secs } => GameLoopCommand::Advance { secs },
        }
    }
}

pub fn parse_script(text: &str) -> Result<Vec<ScriptStep>> {
    let mut steps = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let step: ScriptStep = serde_json::from_str(line)
            .with_context(|| format!("invalid script step on line {}", index + 1))?;
        if let ScriptStep::Wait { secs } = step {
            if !secs.is_finite() || secs < 0.0 {
                bail!("line {}: wait must be a non-negative number of seconds", index + 1);
            }
        }
        steps.push(step);
    }
    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use silentpeak_core::types::EnemyId;

    #[test]
    fn parses_commands_and_waits() {
        let text = r#"
# first contact
{"step":"command","command":{"type":"StartMission","base":1,"sub_level":1}}
{"step":"wait","secs":2.5}

{"step":"command","command":{"type":"Fire","target":2,"headshot":true}}
{"step":"command","command":{"type":"Fire"}}
"#;
        let steps = parse_script(text).unwrap();
        assert_eq!(
            steps,
            vec![
                ScriptStep::Command {
                    command: PlayerCommand::StartMission {
                        base: 1,
                        sub_level: 1
                    }
                },
                ScriptStep::Wait { secs: 2.5 },
                ScriptStep::Command {
                    command: PlayerCommand::Fire {
                        target: Some(EnemyId(2)),
                        headshot: true
                    }
                },
                ScriptStep::Command {
                    command: PlayerCommand::Fire {
                        target: None,
                        headshot: false
                    }
                },
            ]
        );
    }

    #[test]
    fn reports_the_bad_line() {
        let text = "{\"step\":\"wait\",\"secs\":1}\n{\"step\":\"jump\"}\n";
        let err = parse_script(text).unwrap_err();
        assert!(err.to_string().contains("line 2"), "{err}");
    }

    #[test]
    fn rejects_negative_wait() {
        assert!(parse_script(r#"{"step":"wait","secs":-1}"#).is_err());
    }

    #[test]
    fn steps_map_to_loop_commands() {
        assert_eq!(
            GameLoopCommand::from(ScriptStep::Wait { secs: 3.0 }),
            GameLoopCommand::Advance { secs: 3.0 }
        );
        assert_eq!(
            GameLoopCommand::from(ScriptStep::Command {
                command: PlayerCommand::Abort
            }),
            GameLoopCommand::Player(PlayerCommand::Abort)
        );
    }
}
