//! Background compute activities.
//!
//! Neither function depends on the platform adapter, so both are available
//! everywhere. The numeric results exist only to keep the optimizer from
//! discarding the work; callers use them for verbose output at most.

use rand::Rng;
use std::hint::black_box;

pub const MEMORY_MIN_ITEMS: usize = 100;
pub const MEMORY_MAX_ITEMS: usize = 1_099;
pub const CPU_ITERATIONS_PER_LEVEL: u64 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MemoryChurn {
    pub items: usize,
    pub checksum: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CpuChurn {
    pub iterations: u64,
    pub result: f64,
}

/// Allocates `100..=1099` random floats and folds them with `sin * cos`.
pub fn memory_churn<R: Rng + ?Sized>(rng: &mut R) -> MemoryChurn {
    let items = rng.gen_range(MEMORY_MIN_ITEMS..=MEMORY_MAX_ITEMS);
    let data: Vec<f64> = (0..items).map(|_| rng.gen::<f64>() * 1_000.0).collect();
    let checksum: f64 = black_box(&data).iter().map(|v| v.sin() * v.cos()).sum();
    MemoryChurn {
        items,
        checksum: black_box(checksum),
    }
}

/// Sums `sqrt(i) * ln(i + 1)` over `intensity * 10_000` iterations.
pub fn cpu_churn(intensity: u8) -> CpuChurn {
    let iterations = u64::from(intensity) * CPU_ITERATIONS_PER_LEVEL;
    let result = (0..iterations).fold(0.0_f64, |acc, i| {
        let i = black_box(i) as f64;
        acc + i.sqrt() * (i + 1.0).ln()
    });
    CpuChurn {
        iterations,
        result: black_box(result),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_memory_churn_size_in_range() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let churn = memory_churn(&mut rng);
            assert!((MEMORY_MIN_ITEMS..=MEMORY_MAX_ITEMS).contains(&churn.items));
            assert!(churn.checksum.is_finite());
        }
    }

    #[test]
    fn test_cpu_churn_scales_with_intensity() {
        assert_eq!(cpu_churn(1).iterations, 10_000);
        assert_eq!(cpu_churn(5).iterations, 50_000);
        assert!(cpu_churn(3).result > cpu_churn(1).result);
    }
}
