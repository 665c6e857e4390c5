use std::{
    fmt::Display,
    io::Write,
    sync::{atomic, Mutex},
};

/// Rows rendered so far, shared between render tasks
pub struct Progress {
    current: atomic::AtomicUsize,
    max: usize,
    stdout: Mutex<()>,
}

impl Progress {
    pub fn new(max: usize) -> Self {
        Self {
            current: Default::default(),
            max,
            stdout: Mutex::new(()),
        }
    }

    /// Returns the previous value
    pub fn add(&self, k: usize) -> usize {
        self.current.fetch_add(k, atomic::Ordering::SeqCst)
    }

    pub fn get_raw(&self) -> usize {
        self.current.load(atomic::Ordering::SeqCst)
    }

    pub fn percent(&self) -> f32 {
        if self.max == 0 {
            return 1.0;
        }
        (self.get_raw() as f32 / self.max as f32).clamp(0.0, 1.0)
    }

    pub fn print(&self) {
        let _guard = match self.stdout.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        print!("\r{self}");
        let _ = std::io::stdout().flush();
    }
}

impl Display for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        PercentBar {
            percent: self.percent(),
            width: 50,
        }
        .fmt(f)
    }
}

pub struct PercentBar {
    pub percent: f32,
    pub width: usize,
}

impl Display for PercentBar {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let filled = ((self.width - 1) as f32 * self.percent).round() as usize;
        write!(
            f,
            "[{empty:=>width_left$}>{empty:.<width_right$}] {percent:.1}%",
            empty = "",
            width_left = filled,
            width_right = self.width - 1 - filled,
            percent = 100. * self.percent
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{PercentBar, Progress};

    #[test]
    fn percent_bar() {
        let bar = PercentBar {
            percent: 0.5,
            width: 5,
        };
        assert_eq!(bar.to_string(), "[==>..] 50.0%");
        let full = PercentBar {
            percent: 1.0,
            width: 3,
        };
        assert_eq!(full.to_string(), "[==>] 100.0%");
    }

    #[test]
    fn progress_is_clamped() {
        let progress = Progress::new(4);
        assert_eq!(progress.add(2), 0);
        assert_eq!(progress.percent(), 0.5);
        progress.add(10);
        assert_eq!(progress.percent(), 1.0);
        assert_eq!(Progress::new(0).percent(), 1.0);
    }
}
