use std::sync::Mutex;
use std::time::{Duration, Instant};

use sysinfo::{Pid, System};

#[derive(Debug, Clone)]
pub struct StageStats {
    pub cpu_usage: f32,
    pub memory_mb: u64,
    pub peak_memory_mb: u64,
    pub elapsed: Duration,
}

/// Samples process CPU/memory around pipeline stages. Disabled instances
/// are no-ops so the engine can hold one unconditionally.
pub struct SystemMonitor {
    inner: Option<Mutex<MonitorState>>,
    start: Instant,
}

struct MonitorState {
    system: System,
    pid: Pid,
    peak_memory_mb: u64,
}

impl SystemMonitor {
    pub fn new(enabled: bool) -> Self {
        let inner = if enabled {
            sysinfo::get_current_pid().ok().map(|pid| {
                let mut system = System::new_all();
                system.refresh_all();
                Mutex::new(MonitorState {
                    system,
                    pid,
                    peak_memory_mb: 0,
                })
            })
        } else {
            None
        };

        Self {
            inner,
            start: Instant::now(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.inner.is_some()
    }

    fn sample(&self) -> Option<StageStats> {
        let mutex = self.inner.as_ref()?;
        let mut state = mutex.lock().ok()?;
        state.system.refresh_all();

        let pid = state.pid;
        let (cpu_usage, memory_mb) = {
            let process = state.system.process(pid)?;
            (process.cpu_usage(), process.memory() / 1024 / 1024)
        };
        if memory_mb > state.peak_memory_mb {
            state.peak_memory_mb = memory_mb;
        }

        Some(StageStats {
            cpu_usage,
            memory_mb,
            peak_memory_mb: state.peak_memory_mb,
            elapsed: self.start.elapsed(),
        })
    }

    pub fn log_stats(&self, stage: &str) {
        if let Some(stats) = self.sample() {
            tracing::info!(
                "📊 {} - CPU: {:.1}%, Memory: {}MB, Peak: {}MB, Time: {:?}",
                stage,
                stats.cpu_usage,
                stats.memory_mb,
                stats.peak_memory_mb,
                stats.elapsed
            );
        }
    }

    pub fn log_final_stats(&self) {
        if let Some(stats) = self.sample() {
            tracing::info!(
                "📊 Final Stats - Total Time: {:?}, Peak Memory: {}MB",
                stats.elapsed,
                stats.peak_memory_mb
            );
        }
    }
}

impl Default for SystemMonitor {
    fn default() -> Self {
        Self::new(false)
    }
}
