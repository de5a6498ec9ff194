//! Runtime settings for [`OrderSystem`](crate::lifecycle::OrderSystem).
//!
//! Read from `config/table_order.toml` when present, then overridden by environment variables
//! prefixed `TABLE_ORDER__` (e.g. `TABLE_ORDER__CHANNEL_BUFFER=64`). Every field has a default,
//! so an empty environment yields a working configuration.

use crate::cart::DEFAULT_MAX_LINE_QUANTITY;
use crate::order_actor::{FIRST_ORDER_NUMBER, LAST_ORDER_NUMBER};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

const CONFIG_FILE: &str = "config/table_order.toml";
const ENV_PREFIX: &str = "TABLE_ORDER";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SystemConfig {
    /// Request queue length of each actor.
    #[serde(default = "default_channel_buffer")]
    pub channel_buffer: usize,
    /// How far a change subscriber may fall behind before it skips events.
    #[serde(default = "default_notification_capacity")]
    pub notification_capacity: usize,
    #[serde(default = "default_max_line_quantity")]
    pub max_line_quantity: u32,
    /// First order number handed out per restaurant. Both ends of the range are 5-digit.
    #[serde(default = "default_order_number_first")]
    pub order_number_first: u32,
    /// Last order number before the sequence wraps to `order_number_first`.
    #[serde(default = "default_order_number_last")]
    pub order_number_last: u32,
}

fn default_channel_buffer() -> usize {
    32
}

fn default_notification_capacity() -> usize {
    256
}

fn default_max_line_quantity() -> u32 {
    DEFAULT_MAX_LINE_QUANTITY
}

fn default_order_number_first() -> u32 {
    FIRST_ORDER_NUMBER
}

fn default_order_number_last() -> u32 {
    LAST_ORDER_NUMBER
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            channel_buffer: default_channel_buffer(),
            notification_capacity: default_notification_capacity(),
            max_line_quantity: default_max_line_quantity(),
            order_number_first: default_order_number_first(),
            order_number_last: default_order_number_last(),
        }
    }
}

impl SystemConfig {
    /// Load from the optional config file and `TABLE_ORDER__*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_builder(
            Config::builder()
                .add_source(File::with_name(CONFIG_FILE).required(false))
                .add_source(
                    Environment::with_prefix(ENV_PREFIX)
                        .separator("__")
                        .try_parsing(true),
                ),
        )
    }

    /// Build from explicit sources. Missing keys take their defaults.
    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let config: SystemConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.channel_buffer == 0 {
            return Err(ConfigError::Message(
                "channel_buffer must be at least 1".to_string(),
            ));
        }
        if self.notification_capacity == 0 {
            return Err(ConfigError::Message(
                "notification_capacity must be at least 1".to_string(),
            ));
        }
        if self.max_line_quantity == 0 {
            return Err(ConfigError::Message(
                "max_line_quantity must be at least 1".to_string(),
            ));
        }
        let five_digits = FIRST_ORDER_NUMBER..=LAST_ORDER_NUMBER;
        if !five_digits.contains(&self.order_number_first)
            || !five_digits.contains(&self.order_number_last)
        {
            return Err(ConfigError::Message(format!(
                "order numbers must lie within {FIRST_ORDER_NUMBER}..={LAST_ORDER_NUMBER}, got {}..={}",
                self.order_number_first, self.order_number_last
            )));
        }
        if self.order_number_first >= self.order_number_last {
            return Err(ConfigError::Message(format!(
                "order number range {}..={} is empty",
                self.order_number_first, self.order_number_last
            )));
        }
        Ok(())
    }
}
