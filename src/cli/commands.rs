//! CLI command definitions and parsing.

use crate::error::CommandParseError;

/// Default number of history entries shown.
pub const DEFAULT_HISTORY_DISPLAY: u32 = 10;

/// Demographic value used when a flag is omitted.
pub const UNSPECIFIED: &str = "unspecified";

/// Commands of the `symptom-interview` binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run an interview.
    Interview {
        /// Category to interview about.
        category: String,
        /// Age as entered.
        age: String,
        /// Gender as entered.
        gender: String,
    },

    /// List interview categories.
    Categories,

    /// Show recent assessments.
    History {
        /// Maximum number of records to show.
        limit: u32,
    },

    /// Show one assessment in full.
    Show {
        /// Assessment ID.
        id: String,
    },

    /// Delete one stored assessment.
    Delete {
        /// Assessment ID.
        id: String,
    },

    /// Delete all stored assessments.
    Clear,

    /// Print usage.
    Help,
}

impl Command {
    /// Parse a command from string arguments (without the program name).
    ///
    /// # Errors
    ///
    /// Returns [`CommandParseError`] for missing, unknown or malformed arguments.
    pub fn parse(args: &[String]) -> Result<Self, CommandParseError> {
        let Some(first) = args.first() else {
            return Err(CommandParseError::MissingCommand);
        };

        let cmd = first.to_lowercase();
        match cmd.as_str() {
            "interview" | "start" => {
                let mut category = None;
                let mut age = UNSPECIFIED.to_string();
                let mut gender = UNSPECIFIED.to_string();

                let mut i = 1;
                while i < args.len() {
                    match args[i].as_str() {
                        "--age" | "-a" => {
                            i += 1;
                            age = flag_value(args, i, "--age")?;
                        }
                        "--gender" | "-g" => {
                            i += 1;
                            gender = flag_value(args, i, "--gender")?;
                        }
                        flag if flag.starts_with('-') => {
                            return Err(CommandParseError::UnknownFlag(flag.to_string()));
                        }
                        value if category.is_none() => category = Some(value.to_lowercase()),
                        extra => {
                            return Err(CommandParseError::InvalidValue {
                                flag: "category".into(),
                                value: extra.to_string(),
                            });
                        }
                    }
                    i += 1;
                }

                let category =
                    category.ok_or_else(|| CommandParseError::MissingValue("category".into()))?;
                Ok(Self::Interview {
                    category,
                    age,
                    gender,
                })
            }

            "categories" | "list" => Ok(Self::Categories),

            "history" => {
                let mut limit = DEFAULT_HISTORY_DISPLAY;

                let mut i = 1;
                while i < args.len() {
                    match args[i].as_str() {
                        "--limit" | "-l" => {
                            i += 1;
                            let value = flag_value(args, i, "--limit")?;
                            limit = value
                                .parse::<u32>()
                                .ok()
                                .filter(|n| *n > 0)
                                .ok_or(CommandParseError::InvalidValue {
                                    flag: "--limit".into(),
                                    value,
                                })?;
                        }
                        _ => {
                            return Err(CommandParseError::UnknownFlag(args[i].clone()));
                        }
                    }
                    i += 1;
                }

                Ok(Self::History { limit })
            }

            "show" => {
                if args.len() < 2 {
                    return Err(CommandParseError::MissingValue("assessment_id".into()));
                }
                Ok(Self::Show {
                    id: args[1].clone(),
                })
            }

            "delete" | "rm" => {
                if args.len() < 2 {
                    return Err(CommandParseError::MissingValue("assessment_id".into()));
                }
                Ok(Self::Delete {
                    id: args[1].clone(),
                })
            }

            "clear" => Ok(Self::Clear),

            "help" | "--help" | "-h" => Ok(Self::Help),

            _ => Err(CommandParseError::UnknownCommand(cmd)),
        }
    }
}

fn flag_value(args: &[String], i: usize, flag: &str) -> Result<String, CommandParseError> {
    args.get(i)
        .cloned()
        .ok_or_else(|| CommandParseError::MissingValue(flag.into()))
}
