use chrono::{DateTime, Duration, SecondsFormat, Utc};
use chrono_humanize::HumanTime;
use prost_types::Timestamp;

/// How timestamps are shown in tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimeFormat {
    /// "3 minutes ago".
    #[default]
    Relative,
    /// RFC 3339, UTC.
    Rfc3339,
}

/// Display settings fixed for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub time_format: TimeFormat,
    /// Reference point for relative times.
    pub now: DateTime<Utc>,
}

impl RenderOptions {
    pub fn new(time_format: TimeFormat) -> Self {
        Self {
            time_format,
            now: Utc::now(),
        }
    }

    /// Renders a channelz timestamp.
    ///
    /// Servers send the zero timestamp for "unknown", which renders empty
    /// rather than as the epoch.
    pub fn pretty_time(&self, ts: Option<&Timestamp>) -> String {
        let Some(ts) = ts.filter(|ts| ts.seconds != 0 || ts.nanos != 0) else {
            return String::new();
        };
        let Some(at) = u32::try_from(ts.nanos)
            .ok()
            .and_then(|nanos| DateTime::from_timestamp(ts.seconds, nanos))
        else {
            return ts.to_string();
        };
        match self.time_format {
            TimeFormat::Rfc3339 => at.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            TimeFormat::Relative => {
                let delta = at - self.now;
                let seconds = (delta.num_milliseconds() as f64 / 1000.0).round() as i64;
                HumanTime::from(Duration::seconds(seconds)).to_string()
            }
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::new(TimeFormat::default())
    }
}
