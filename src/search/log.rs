use log::info;

/// Summary of one completed search
pub struct SearchInfo {
    pub depth: u32,
    pub score: i32,
    pub nodes: u64,
    pub time_ms: u128,
    pub best_move: String,
}

pub trait SearchLogger {
    fn info(&self, info: &SearchInfo);
}

/// Reports through the `log` facade at info level
pub struct LogReporter;

impl SearchLogger for LogReporter {
    fn info(&self, info: &SearchInfo) {
        info!(
            "search depth {} score {} nodes {} time {}ms best {}",
            info.depth, info.score, info.nodes, info.time_ms, info.best_move
        );
    }
}

/// Prints an engine-style `info` line on stdout
pub struct StdoutLogger;

impl SearchLogger for StdoutLogger {
    fn info(&self, info: &SearchInfo) {
        println!(
            "info depth {} score {} nodes {} time {} pv {}",
            info.depth, info.score, info.nodes, info.time_ms, info.best_move
        );
    }
}
