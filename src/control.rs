//! Control surface command set.
//!
//! Clients drive the face with a handful of commands modelled on HTTP verbs
//! and paths. The transport is not part of this module: anything that can
//! deliver `"PUT /emotion happy"` style lines can use it.
//!
//! | Command | Response |
//! |---------|----------|
//! | `GET /emotion/all` | known emotions, newline separated |
//! | `GET /emotion` | current emotion |
//! | `PUT /emotion <name>` | empty; name is stored verbatim |
//! | `GET /blank` | `true` or `false` |
//! | `PUT /blank <body>` | empty; blank iff body is `true` |
//! | `GET /state` | JSON snapshot of the expression state |

use std::fmt;
use std::str::FromStr;

use crate::error::{FacesError, Result};
use crate::render::EmotionDrawer;
use crate::state::ExpressionState;

/// A parsed control command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ListEmotions,
    GetEmotion,
    SetEmotion(String),
    GetBlank,
    SetBlank(bool),
    GetState,
}

impl FromStr for Command {
    type Err = FacesError;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim_end_matches(['\r', '\n']);
        let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));
        let (path, body) = rest.split_once(' ').unwrap_or((rest, ""));

        match (verb.to_ascii_uppercase().as_str(), path) {
            ("GET", "/emotion/all") => Ok(Command::ListEmotions),
            ("GET", "/emotion") => Ok(Command::GetEmotion),
            ("PUT", "/emotion") => Ok(Command::SetEmotion(body.to_string())),
            ("GET", "/blank") => Ok(Command::GetBlank),
            ("PUT", "/blank") => Ok(Command::SetBlank(body == "true")),
            ("GET", "/state") => Ok(Command::GetState),
            _ => Err(FacesError::Parse {
                message: format!("Unknown command: {}", line),
                help: Some(
                    "Expected GET /emotion/all, GET|PUT /emotion, GET|PUT /blank or GET /state"
                        .to_string(),
                ),
            }),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::ListEmotions => write!(f, "GET /emotion/all"),
            Command::GetEmotion => write!(f, "GET /emotion"),
            Command::SetEmotion(name) => write!(f, "PUT /emotion {}", name),
            Command::GetBlank => write!(f, "GET /blank"),
            Command::SetBlank(blank) => write!(f, "PUT /blank {}", blank),
            Command::GetState => write!(f, "GET /state"),
        }
    }
}

/// Reply to a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub body: String,
    pub content_type: &'static str,
}

impl Response {
    fn text(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            content_type: "text/plain",
        }
    }

    fn empty() -> Self {
        Self::text("")
    }
}

/// Applies commands to the expression state.
#[derive(Debug, Clone, Copy)]
pub struct ControlSurface<'a> {
    state: &'a ExpressionState,
    emotions: &'a EmotionDrawer,
}

impl<'a> ControlSurface<'a> {
    pub fn new(state: &'a ExpressionState, emotions: &'a EmotionDrawer) -> Self {
        Self { state, emotions }
    }

    pub fn handle(&self, command: &Command) -> Result<Response> {
        let response = match command {
            Command::ListEmotions => Response::text(self.emotions.emotions_separated_by_newline()),
            Command::GetEmotion => Response::text(self.state.emotion()),
            Command::SetEmotion(name) => {
                if !self.emotions.contains(name) {
                    tracing::warn!(emotion = %name, "emotion not loaded, eyes will not be drawn");
                }
                self.state.set_emotion(name.clone());
                Response::empty()
            }
            Command::GetBlank => Response::text(if self.state.blank() { "true" } else { "false" }),
            Command::SetBlank(blank) => {
                self.state.set_blank(*blank);
                Response::empty()
            }
            Command::GetState => {
                let body = serde_json::to_string(&self.state.snapshot()).map_err(|e| {
                    FacesError::Parse {
                        message: format!("Failed to serialize state: {}", e),
                        help: None,
                    }
                })?;
                Response {
                    body,
                    content_type: "application/json",
                }
            }
        };

        tracing::debug!(command = %command, "handled control command");
        Ok(response)
    }

    /// Parse and handle one command line.
    pub fn handle_line(&self, line: &str) -> Result<Response> {
        self.handle(&line.parse()?)
    }
}
