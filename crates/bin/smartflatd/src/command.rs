//! Resident commands read line by line from standard input.

use std::str::FromStr;

use smartflat_domain::device::{DeviceKey, UnknownDevice};

/// A discrete action requested by the resident.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Arm,
    Disarm,
    Panic,
    Morning,
    /// Press the coffee maker button.
    Coffee,
    Toggle(DeviceKey),
    Brightness(DeviceKey, u8),
    Temperature(f64),
    /// Run a pass now instead of waiting for the next tick.
    Poll,
    Status,
    Help,
    Quit,
}

/// Usage text printed by `help`.
pub const HELP: &str = "\
commands:
  arm | disarm | panic | morning | coffee | poll | status | help | quit
  toggle <device>
  brightness <device> <0-100>
  temp <celsius>
devices:
  living_room_light bedroom_light thermostat dehumidifier air_purifier
  coffee_maker siren camera";

/// Why a line could not be understood.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command {0:?}, type `help` for usage")]
    Unknown(String),
    #[error("`{command}` expects {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    #[error("invalid device")]
    Device(#[from] UnknownDevice),
    #[error("invalid {argument}: {value:?}")]
    InvalidNumber {
        argument: &'static str,
        value: String,
    },
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err(CommandError::Empty);
        };

        match head.to_ascii_lowercase().as_str() {
            "arm" => Ok(Self::Arm),
            "disarm" => Ok(Self::Disarm),
            "panic" => Ok(Self::Panic),
            "morning" => Ok(Self::Morning),
            "coffee" => Ok(Self::Coffee),
            "poll" => Ok(Self::Poll),
            "status" => Ok(Self::Status),
            "help" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            "toggle" => {
                let device = required(words.next(), "toggle", "a device")?;
                Ok(Self::Toggle(device.parse()?))
            }
            "brightness" => {
                let device = required(words.next(), "brightness", "a device and a level")?;
                let level = required(words.next(), "brightness", "a level")?;
                Ok(Self::Brightness(
                    device.parse()?,
                    number(level, "brightness level")?,
                ))
            }
            "temp" | "temperature" => {
                let value = required(words.next(), "temp", "a temperature")?;
                Ok(Self::Temperature(number(value, "temperature")?))
            }
            _ => Err(CommandError::Unknown(head.to_string())),
        }
    }
}

fn required<'a>(
    word: Option<&'a str>,
    command: &'static str,
    argument: &'static str,
) -> Result<&'a str, CommandError> {
    word.ok_or(CommandError::MissingArgument { command, argument })
}

fn number<T: FromStr>(value: &str, argument: &'static str) -> Result<T, CommandError> {
    value.parse().map_err(|_| CommandError::InvalidNumber {
        argument,
        value: value.to_string(),
    })
}
