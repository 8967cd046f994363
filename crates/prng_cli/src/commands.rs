use std::io::Write;

use prngs::clock::Clock;
use prngs::mt::Mt19937;
use prngs::{Generator, GeneratorConfig, GeneratorSet};
use tracing::{debug, info, warn};

use crate::args::StreamTarget;
use crate::config::Settings;
use crate::error::CliError;
use crate::output::Printer;

fn build_set<C: Clock>(cfg: GeneratorConfig, clock: &C) -> GeneratorSet {
    let set = GeneratorSet::from_config(cfg, clock);
    info!(
        seed = set.lcg().state(),
        carry = set.mwc().carry(),
        seeded_from_clock = cfg.seed.is_none(),
        "generator set ready"
    );
    if set.xorshift().state() == 0 {
        warn!("xorshift seed is 0, which is a fixed point: it will only produce 0.0");
    }
    set
}

/// Every configured generator once per iteration, separator after each group.
pub fn demo<C: Clock, W: Write>(
    settings: &Settings,
    clock: &C,
    out: &mut Printer<W>,
) -> Result<(), CliError> {
    let mut set = build_set(settings.demo_generator(), clock);
    debug!(iterations = settings.count, algorithms = ?settings.algorithms, "demo");

    for _ in 0..settings.count {
        for &alg in &settings.algorithms {
            out.value(alg.label(), set.next(alg))?;
        }
        out.separator()?;
    }
    Ok(())
}

pub fn stream<C: Clock, W: Write>(
    settings: &Settings,
    target: StreamTarget,
    clock: &C,
    out: &mut Printer<W>,
) -> Result<(), CliError> {
    match target {
        StreamTarget::Set(alg) => {
            let mut set = build_set(settings.generator, clock);
            debug!(%alg, count = settings.count, "stream");
            for _ in 0..settings.count {
                out.value(alg.label(), set.next(alg))?;
            }
        }
        StreamTarget::Mt => {
            // Truncated to the 32-bit seed MT19937 takes; no seed means the reference default.
            let mut mt = settings
                .generator
                .seed
                .map(|s| Mt19937::new(s as u32))
                .unwrap_or_default();
            debug!(count = settings.count, "stream mt19937");
            write_all(&mut mt, settings.count, out)?;
        }
    }
    Ok(())
}

fn write_all<G: Generator, W: Write>(
    g: &mut G,
    count: usize,
    out: &mut Printer<W>,
) -> Result<(), CliError> {
    for _ in 0..count {
        out.value(G::NAME, g.next_f64())?;
    }
    Ok(())
}

pub fn range<C: Clock, W: Write>(
    settings: &Settings,
    min: i64,
    max: i64,
    clock: &C,
    out: &mut Printer<W>,
) -> Result<(), CliError> {
    if max < min {
        return Err(CliError::InvalidValue {
            flag: "max".to_string(),
            value: format!("{} (below min {})", max, min),
        });
    }
    let mut set = build_set(settings.generator, clock);
    for _ in 0..settings.count {
        out.integer("lcg", set.next_lcg_range(min, max))?;
    }
    Ok(())
}

/// Advance every generator `count` times, then print the set as JSON.
pub fn snapshot<C: Clock, W: Write>(
    settings: &Settings,
    clock: &C,
    out: &mut Printer<W>,
) -> Result<(), CliError> {
    let mut set = build_set(settings.generator, clock);
    for _ in 0..settings.count {
        for alg in prngs::Algorithm::ALL {
            set.next(alg);
        }
    }
    out.document(&serde_json::to_string_pretty(&set)?)?;
    Ok(())
}
