use thiserror::Error;

/// Payload carried by one segment when no `--mss` is given
pub const SEGMENT_BYTES : u32 = 1400;

#[derive(Error, Debug, PartialEq)]
pub enum SpeedError{
    /// Latency is the divisor, it has to be strictly positive
    #[error("invalid latency {0}ms, it must be greater than zero")]
    InvalidLatency(i64),
    #[error("invalid window {0}, it must not be negative")]
    InvalidWindow(i64),
    #[error("invalid segment size, it must be greater than zero")]
    InvalidSegment,
}

/// One throughput calculation: a round trip of `latency_ms` with `window`
/// segments in flight.
#[derive(Debug, Clone, Copy)]
pub struct Estimate{
    latency_ms : u64,
    window : u64,
    segment_bytes : u32
}

impl Estimate{

    /**
     * Validate the raw command line values
     */
    pub fn new(latency : i64, win : i64) -> Result<Estimate, SpeedError>{
        if latency <= 0{
            return Err(SpeedError::InvalidLatency(latency));
        }
        if win < 0{
            return Err(SpeedError::InvalidWindow(win));
        }
        Ok(Estimate{latency_ms : latency as u64, window : win as u64, segment_bytes : SEGMENT_BYTES})
    }

    pub fn with_segment_bytes(mut self, segment_bytes : u32) -> Result<Estimate, SpeedError>{
        if segment_bytes == 0{
            return Err(SpeedError::InvalidSegment);
        }
        self.segment_bytes = segment_bytes;
        Ok(self)
    }

    pub fn get_latency(&self) -> u64{
        self.latency_ms
    }

    pub fn get_window(&self) -> u64{
        self.window
    }

    pub fn get_segment_bytes(&self) -> u32{
        self.segment_bytes
    }

    /**
     * Theoretical throughput in KB/s: one full window per round trip
     */
    pub fn speed(&self) -> f64{
        // keep the evaluation order, it decides the rounding of the last digit
        (1000.0 / self.latency_ms as f64) * self.window as f64 * self.segment_bytes as f64 / 1024.0
    }
}

pub fn report(speed : f64) -> String{
    format!("Theoretical speed {:.2}KB/s", speed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_segment_per_second() {
        let estimate = Estimate::new(1000, 1).unwrap();
        assert_eq!(estimate.speed(), 1.3671875);
        assert_eq!(report(estimate.speed()), "Theoretical speed 1.37KB/s");
    }

    #[test]
    fn matches_formula() {
        for (latency, win) in [(1, 1), (7, 3), (100, 10), (250, 64), (33, 1024)] {
            let expected = (1000.0 / latency as f64) * win as f64 * 1400.0 / 1024.0;
            assert_eq!(Estimate::new(latency, win).unwrap().speed(), expected);
        }
        assert_eq!(report(Estimate::new(100, 10).unwrap().speed()), "Theoretical speed 136.72KB/s");
    }

    #[test]
    fn empty_window() {
        let estimate = Estimate::new(20, 0).unwrap();
        assert_eq!(report(estimate.speed()), "Theoretical speed 0.00KB/s");
    }

    #[test]
    fn rejects_zero_latency() {
        assert_eq!(Estimate::new(0, 10).unwrap_err(), SpeedError::InvalidLatency(0));
        assert_eq!(Estimate::new(-5, 10).unwrap_err(), SpeedError::InvalidLatency(-5));
        assert!(Estimate::new(0, 10).unwrap_err().to_string().contains("invalid latency"));
    }

    #[test]
    fn rejects_negative_window() {
        assert_eq!(Estimate::new(10, -1).unwrap_err(), SpeedError::InvalidWindow(-1));
    }

    #[test]
    fn custom_segment_size() {
        let estimate = Estimate::new(1000, 1).unwrap().with_segment_bytes(1438).unwrap();
        assert_eq!(estimate.get_segment_bytes(), 1438);
        assert_eq!(report(estimate.speed()), "Theoretical speed 1.40KB/s");
        assert_eq!(
            Estimate::new(1000, 1).unwrap().with_segment_bytes(0).unwrap_err(),
            SpeedError::InvalidSegment
        );
    }
}
