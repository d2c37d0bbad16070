use tracing::{debug, info};

#[derive(Debug)]
pub struct SearchStatistics {
    /// Number of nodes expanded
    expanded_nodes: i32,
    /// Number of unique nodes generated
    generated_nodes: i32,
    /// Time when the search started
    search_start_time: std::time::Instant,
    /// Time when the last log was printed, used for periodic logging
    last_log_time: std::time::Instant,
}

impl SearchStatistics {
    pub fn new() -> Self {
        debug!("starting search");
        Self {
            expanded_nodes: 0,
            generated_nodes: 0,
            search_start_time: std::time::Instant::now(),
            last_log_time: std::time::Instant::now(),
        }
    }

    pub fn increment_expanded_nodes(&mut self) {
        self.expanded_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_generated_nodes(&mut self) {
        self.generated_nodes += 1;
        self.log_if_needed();
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed() > std::time::Duration::from_secs(10) {
            self.last_log_time = std::time::Instant::now();
            self.log();
        }
    }

    fn log(&self) {
        info!(
            expanded_nodes = self.expanded_nodes,
            generated_nodes = self.generated_nodes,
            time_elapsed = self.search_start_time.elapsed().as_secs_f64(),
        );
    }

    pub fn finalise(&self) {
        info!(
            expanded_nodes = self.expanded_nodes,
            generated_nodes = self.generated_nodes,
            search_time = self.search_start_time.elapsed().as_secs_f64(),
        );
    }
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}
