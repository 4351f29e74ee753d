//! Game constants and the few settings that can be changed from the environment.

use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::render::Rgb;

pub const GRID_SIZE: i32 = 15;
pub const FPS: u32 = 10;

/// Smallest grid the fixed starting snake fits in.
pub const MIN_GRID_SIZE: i32 = 8;
pub const MAX_GRID_SIZE: i32 = 100;
pub const MAX_FPS: u32 = 60;

pub const GREEN_BG: Rgb = Rgb(175, 215, 70);
pub const FRAME_COLOR: Rgb = Rgb(255, 255, 255);
pub const TEXT_COLOR: Rgb = Rgb(255, 255, 255);
pub const SNAKE_COLOR: Rgb = Rgb(70, 116, 233);
pub const FOOD_COLOR: Rgb = Rgb(214, 48, 49);

pub const GAME_OVER_TEXT: &str = "GAME OVER - SPACE TO RESTART";

const ENV_GRID_SIZE: &str = "SNAKE_GRID_SIZE";
const ENV_FPS: &str = "SNAKE_FPS";
const ENV_BELL: &str = "SNAKE_BELL";
const ENV_LOG: &str = "SNAKE_LOG";

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub grid_size: i32,
    pub fps: u32,
    pub bell: bool,
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings { grid_size: GRID_SIZE, fps: FPS, bell: true, log_file: None }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Settings::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Settings::default();

        let settings = Settings {
            grid_size: parse_or(&lookup, ENV_GRID_SIZE, defaults.grid_size, "expected an integer")?,
            fps: parse_or(&lookup, ENV_FPS, defaults.fps, "expected a positive integer")?,
            bell: match lookup(ENV_BELL) {
                Some(value) => parse_flag(&value)?,
                None => defaults.bell,
            },
            log_file: lookup(ENV_LOG).filter(|path| !path.is_empty()).map(PathBuf::from),
        };

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&self.grid_size) {
            return Err(Error::InvalidSetting {
                name: ENV_GRID_SIZE,
                value: self.grid_size.to_string(),
                reason: "grid size must be between 8 and 100",
            });
        }

        if !(1..=MAX_FPS).contains(&self.fps) {
            return Err(Error::InvalidSetting {
                name: ENV_FPS,
                value: self.fps.to_string(),
                reason: "frame rate must be between 1 and 60",
            });
        }

        Ok(())
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T, reason: &'static str) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| Error::InvalidSetting { name, value, reason }),
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(Error::InvalidSetting {
            name: ENV_BELL,
            value: value.to_string(),
            reason: "expected true or false",
        }),
    }
}
