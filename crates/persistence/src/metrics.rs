//! Query and pool instrumentation.
//!
//! Every repository method wraps its statement in a [`QueryTimer`] so slow
//! store operations show up per query name.

use metrics::{gauge, histogram};
use sqlx::PgPool;
use std::time::Instant;

/// Times one store operation. Call [`QueryTimer::record`] once the
/// statement has resolved, whether it succeeded or not.
pub struct QueryTimer {
    query_name: String,
    start: Instant,
}

impl QueryTimer {
    pub fn new(query_name: impl Into<String>) -> Self {
        Self {
            query_name: query_name.into(),
            start: Instant::now(),
        }
    }

    /// Report the elapsed time under `database_query_duration_seconds`.
    pub fn record(self) {
        histogram!(
            "database_query_duration_seconds",
            "query" => self.query_name
        )
        .record(self.start.elapsed().as_secs_f64());
    }
}

/// Snapshot the connection pool gauges. Meant to be called on an interval.
pub fn record_pool_metrics(pool: &PgPool) {
    let total = pool.size() as usize;
    let idle = pool.num_idle();

    gauge!("database_connections_active").set(total.saturating_sub(idle) as f64);
    gauge!("database_connections_idle").set(idle as f64);
    gauge!("database_connections_total").set(total as f64);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn timer_keeps_its_query_name() {
        let timer = QueryTimer::new("list_active_templates");
        assert_eq!(timer.query_name, "list_active_templates");
    }

    #[test]
    fn timer_measures_elapsed_time() {
        let timer = QueryTimer::new("publish_invitation");
        std::thread::sleep(Duration::from_millis(5));
        assert!(timer.start.elapsed() >= Duration::from_millis(5));
        timer.record();
    }
}
