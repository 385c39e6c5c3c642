// =============================================================================
// Linear and Random Access Timing
// =============================================================================
//
// Every pattern loop has the same shape: prepare the input, start the timer,
// call the variant, stop the timer, fold the result into the running sum.
// Only the call sits between start and stop.

use std::hint::black_box;

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use super::timer::{average_ms, Clock, Timer};
use super::{PerfRun, VariantTiming};
use crate::codec::{low_mask, Coordinate, CoordOf, Dim, Direction, GroupKey, MortonCode};
use crate::config::BenchConfig;
use crate::reference::control_encode;
use crate::registry::{Decode2d, Decode3d, Encode2d, Encode3d, Registry, VariantSet};

#[inline(always)]
fn coord<M: MortonCode>(v: u64) -> CoordOf<M> {
    Coordinate::from_u64(v)
}

/// `max^dim` without overflow for every valid `max`.
pub fn sweep_len(max: u32, dim: Dim) -> u64 {
    u64::from(max).pow(dim.get())
}

/// A random-pattern pool for `group`: in-field coordinates for encoders,
/// in-field codes for decoders.
pub fn random_pool<M: MortonCode, R: Rng>(rng: &mut R, size: usize, group: GroupKey) -> Vec<u64> {
    let mask = match group.direction {
        Direction::Encode => M::field_mask(group.dim),
        Direction::Decode => low_mask(group.dim.get() * M::field_bits(group.dim)),
    };
    (0..size).map(|_| rng.random::<u64>() & mask).collect()
}

// =============================================================================
// Linear pattern
// =============================================================================

/// Times `f` over every `(x, y)` in `[0, max)^2`.
pub fn linear_encode_2d<M: MortonCode, C: Clock>(
    f: Encode2d<M>,
    max: u32,
    timer: &mut Timer<'_, C>,
    sum: &mut u64,
) {
    let (total, max) = (sweep_len(max, Dim::Two), u64::from(max));
    for i in 0..total {
        let (x, y) = (coord::<M>(i % max), coord::<M>(i / max));
        timer.start();
        let m = f(black_box(x), black_box(y));
        timer.stop();
        *sum = sum.wrapping_add(m.to_u64());
    }
}

/// Times `f` over every `(x, y, z)` in `[0, max)^3`.
pub fn linear_encode_3d<M: MortonCode, C: Clock>(
    f: Encode3d<M>,
    max: u32,
    timer: &mut Timer<'_, C>,
    sum: &mut u64,
) {
    let (total, max) = (sweep_len(max, Dim::Three), u64::from(max));
    for i in 0..total {
        let (x, y, z) = (coord::<M>(i % max), coord::<M>((i / max) % max), coord::<M>(i / (max * max)));
        timer.start();
        let m = f(black_box(x), black_box(y), black_box(z));
        timer.stop();
        *sum = sum.wrapping_add(m.to_u64());
    }
}

/// Times `f` on the reference codes of the `[0, max)^2` sweep.
///
/// Codes are produced one row at a time, outside the timed region.
pub fn linear_decode_2d<M: MortonCode, C: Clock>(
    f: Decode2d<M>,
    max: u32,
    timer: &mut Timer<'_, C>,
    sum: &mut u64,
) {
    let field = M::field_bits(Dim::Two);
    let mut row = Vec::with_capacity(max as usize);
    for y in 0..u64::from(max) {
        row.clear();
        row.extend((0..u64::from(max)).map(|x| M::from_u64(control_encode(&[x, y], field))));
        for &m in &row {
            timer.start();
            let (a, b) = f(black_box(m));
            timer.stop();
            *sum = sum.wrapping_add(a.to_u64()).wrapping_add(b.to_u64());
        }
    }
}

/// Times `f` on the reference codes of the `[0, max)^3` sweep.
///
/// Codes are produced one row at a time, outside the timed region.
pub fn linear_decode_3d<M: MortonCode, C: Clock>(
    f: Decode3d<M>,
    max: u32,
    timer: &mut Timer<'_, C>,
    sum: &mut u64,
) {
    let field = M::field_bits(Dim::Three);
    let mut row = Vec::with_capacity(max as usize);
    for z in 0..u64::from(max) {
        for y in 0..u64::from(max) {
            row.clear();
            row.extend(
                (0..u64::from(max)).map(|x| M::from_u64(control_encode(&[x, y, z], field))),
            );
            for &m in &row {
                timer.start();
                let (a, b, c) = f(black_box(m));
                timer.stop();
                *sum = sum
                    .wrapping_add(a.to_u64())
                    .wrapping_add(b.to_u64())
                    .wrapping_add(c.to_u64());
            }
        }
    }
}

// =============================================================================
// Random pattern
// =============================================================================
//
// Call i reads pool[(i + k) % pool.len()] for coordinate k. An empty pool is
// only valid with total == 0.

/// `total` calls of `f` drawing `(x, y)` from `pool`.
pub fn random_encode_2d<M: MortonCode, C: Clock>(
    f: Encode2d<M>,
    pool: &[u64],
    total: u64,
    timer: &mut Timer<'_, C>,
    sum: &mut u64,
) {
    let p = pool.len();
    for i in 0..total as usize {
        let (x, y) = (coord::<M>(pool[i % p]), coord::<M>(pool[(i + 1) % p]));
        timer.start();
        let m = f(black_box(x), black_box(y));
        timer.stop();
        *sum = sum.wrapping_add(m.to_u64());
    }
}

/// `total` calls of `f` drawing `(x, y, z)` from `pool`.
pub fn random_encode_3d<M: MortonCode, C: Clock>(
    f: Encode3d<M>,
    pool: &[u64],
    total: u64,
    timer: &mut Timer<'_, C>,
    sum: &mut u64,
) {
    let p = pool.len();
    for i in 0..total as usize {
        let (x, y, z) = (
            coord::<M>(pool[i % p]),
            coord::<M>(pool[(i + 1) % p]),
            coord::<M>(pool[(i + 2) % p]),
        );
        timer.start();
        let m = f(black_box(x), black_box(y), black_box(z));
        timer.stop();
        *sum = sum.wrapping_add(m.to_u64());
    }
}

/// `total` calls of `f` drawing codes from `pool`.
pub fn random_decode_2d<M: MortonCode, C: Clock>(
    f: Decode2d<M>,
    pool: &[u64],
    total: u64,
    timer: &mut Timer<'_, C>,
    sum: &mut u64,
) {
    let p = pool.len();
    for i in 0..total as usize {
        let m = M::from_u64(pool[i % p]);
        timer.start();
        let (x, y) = f(black_box(m));
        timer.stop();
        *sum = sum.wrapping_add(x.to_u64()).wrapping_add(y.to_u64());
    }
}

/// `total` calls of `f` drawing codes from `pool`.
pub fn random_decode_3d<M: MortonCode, C: Clock>(
    f: Decode3d<M>,
    pool: &[u64],
    total: u64,
    timer: &mut Timer<'_, C>,
    sum: &mut u64,
) {
    let p = pool.len();
    for i in 0..total as usize {
        let m = M::from_u64(pool[i % p]);
        timer.start();
        let (x, y, z) = f(black_box(m));
        timer.stop();
        *sum = sum
            .wrapping_add(x.to_u64())
            .wrapping_add(y.to_u64())
            .wrapping_add(z.to_u64());
    }
}

// =============================================================================
// Group runs
// =============================================================================

/// Inputs shared by all variants of one group within a run.
struct GroupRun<'a, C: Clock> {
    config: &'a BenchConfig,
    clock: &'a C,
    group: GroupKey,
    max: u32,
}

impl<C: Clock> GroupRun<'_, C> {
    /// Averages `trials` runs of `linear` and `random` for one variant.
    ///
    /// Every variant of the group sees the same sequence of random pools.
    fn time<M: MortonCode>(
        &self,
        label: &'static str,
        sum: &mut u64,
        mut linear: impl FnMut(&mut Timer<'_, C>, &mut u64),
        mut random: impl FnMut(&[u64], u64, &mut Timer<'_, C>, &mut u64),
    ) -> VariantTiming {
        let total = sweep_len(self.max, self.group.dim);
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(self.config.seed() ^ u64::from(self.max));

        let mut linear_timer = Timer::new(self.clock);
        let mut random_timer = Timer::new(self.clock);
        for _ in 0..self.config.trials() {
            linear(&mut linear_timer, sum);
            let pool = random_pool::<M, _>(&mut rng, self.config.pool_size(), self.group);
            random(&pool, total, &mut random_timer, sum);
        }

        let timing = VariantTiming {
            group: self.group,
            label,
            total,
            linear_ms: average_ms(linear_timer.elapsed(), self.config.trials()),
            random_ms: average_ms(random_timer.elapsed(), self.config.trials()),
        };
        log::trace!("{} {}: {:?}", self.group, label, timing);
        timing
    }
}

fn run_width<M: MortonCode, C: Clock>(
    set: &VariantSet<M>,
    config: &BenchConfig,
    clock: &C,
    max: u32,
    timings: &mut Vec<VariantTiming>,
    sum: &mut u64,
) {
    for dim in config.dims().iter() {
        let run = |direction| GroupRun {
            config,
            clock,
            group: GroupKey::new(M::BITS, dim, direction),
            max,
        };
        match dim {
            Dim::Two => {
                let enc = run(Direction::Encode);
                for v in &set.encode_2d {
                    timings.push(enc.time::<M>(
                        v.label,
                        sum,
                        |t, s| linear_encode_2d(v.func, max, t, s),
                        |p, n, t, s| random_encode_2d(v.func, p, n, t, s),
                    ));
                }
                let dec = run(Direction::Decode);
                for v in &set.decode_2d {
                    timings.push(dec.time::<M>(
                        v.label,
                        sum,
                        |t, s| linear_decode_2d(v.func, max, t, s),
                        |p, n, t, s| random_decode_2d(v.func, p, n, t, s),
                    ));
                }
            }
            Dim::Three => {
                let enc = run(Direction::Encode);
                for v in &set.encode_3d {
                    timings.push(enc.time::<M>(
                        v.label,
                        sum,
                        |t, s| linear_encode_3d(v.func, max, t, s),
                        |p, n, t, s| random_encode_3d(v.func, p, n, t, s),
                    ));
                }
                let dec = run(Direction::Decode);
                for v in &set.decode_3d {
                    timings.push(dec.time::<M>(
                        v.label,
                        sum,
                        |t, s| linear_decode_3d(v.func, max, t, s),
                        |p, n, t, s| random_decode_3d(v.func, p, n, t, s),
                    ));
                }
            }
        }
    }
}

/// Times every selected group of `registry` at coordinate bound `max`.
pub fn run_perf<C: Clock>(registry: &Registry, config: &BenchConfig, clock: &C, max: u32) -> PerfRun {
    log::debug!("perf run: MAX={} trials={} pool={}", max, config.trials(), config.pool_size());
    let mut timings = Vec::new();
    let mut running_sum = 0u64;
    run_width(&registry.bits32, config, clock, max, &mut timings, &mut running_sum);
    run_width(&registry.bits64, config, clock, max, &mut timings, &mut running_sum);
    PerfRun { max, timings, running_sum }
}
