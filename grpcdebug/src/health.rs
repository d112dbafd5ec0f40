//! Health checking report.

use crate::render::{Field, Output, Report};
use crate::service::HealthCheck;
use std::fmt;
use tonic_health::pb::health_check_response::ServingStatus as ProtoStatus;

/// Label for the empty service name, which stands for the whole server.
pub const OVERALL: &str = "<Overall>";

/// The status of one service, named as the health proto names it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServingStatus {
    Unknown,
    Serving,
    NotServing,
    ServiceUnknown,
}

impl ServingStatus {
    pub fn from_proto(raw: i32) -> Self {
        match ProtoStatus::try_from(raw) {
            Ok(ProtoStatus::Serving) => ServingStatus::Serving,
            Ok(ProtoStatus::NotServing) => ServingStatus::NotServing,
            Ok(ProtoStatus::ServiceUnknown) => ServingStatus::ServiceUnknown,
            Ok(ProtoStatus::Unknown) | Err(_) => ServingStatus::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ServingStatus::Unknown => "UNKNOWN",
            ServingStatus::Serving => "SERVING",
            ServingStatus::NotServing => "NOT_SERVING",
            ServingStatus::ServiceUnknown => "SERVICE_UNKNOWN",
        }
    }
}

impl fmt::Display for ServingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The services to check: the overall status plus `requested`, sorted and
/// deduplicated.
pub fn service_list<I, S>(requested: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut services: Vec<String> = std::iter::once(String::new())
        .chain(requested.into_iter().map(Into::into))
        .collect();
    services.sort();
    services.dedup();
    services
}

/// Checks one service. A failed call reports `SERVICE_UNKNOWN`.
pub async fn check<H: HealthCheck>(health: &H, service: &str) -> ServingStatus {
    match health.check(service).await {
        Ok(status) => status,
        Err(err) => {
            tracing::debug!(service, "health check failed: {err}");
            ServingStatus::ServiceUnknown
        }
    }
}

/// Checks each service in turn, one `name: STATUS` line per service.
pub async fn report<H, I, S>(health: &H, requested: I) -> Output
where
    H: HealthCheck,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut fields = Vec::new();
    for service in service_list(requested) {
        let status = check(health, &service).await;
        let label = if service.is_empty() {
            OVERALL.to_string()
        } else {
            service
        };
        fields.push(Field::new(label, status));
    }
    let mut report = Report::new();
    report.push(fields);
    Output::Report(report)
}
