//! coastal — smallest demo for the vessel transit animator.
//!
//! Animates a vessel from the Chattogram outer anchorage to Patenga
//! (~25 km).  Runs the journey twice: first deterministically, stepping the
//! `Transit` state machine by hand, then in real time on the scheduler's
//! tick thread at an accelerated speed so the demo arrives in a few seconds.

use anyhow::Result;

use vt_anim::{Journey, Transit, TransitObserver, TransitSnapshot, scheduler};
use vt_core::GeoPoint;

// ── Constants ─────────────────────────────────────────────────────────────────

const ANCHORAGE: GeoPoint = GeoPoint { lat: 22.1696, lon: 91.4996 };
const PATENGA:   GeoPoint = GeoPoint { lat: 22.2637, lon: 91.7159 };

const SPEED_KMH:  f64 = 20.0;
const REFRESH_HZ: f64 = 2.0;

/// Speed multiplier for the real-time leg: the true run takes ~74 minutes.
const DEMO_SPEEDUP: f64 = 1_500.0;

// ── Observer ──────────────────────────────────────────────────────────────────

struct SnapshotPrinter;

impl TransitObserver for SnapshotPrinter {
    fn on_update(&mut self, snapshot: &TransitSnapshot) {
        println!(
            "  t={:7.1}s  pos={}  hdg={:5.1}°{}",
            snapshot.elapsed_secs,
            snapshot.position,
            snapshot.heading_deg,
            if snapshot.completed { "  [arrived]" } else { "" },
        );
    }

    fn on_complete(&mut self) {
        println!("  journey complete");
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== coastal — vessel transit animator ===");
    println!("{ANCHORAGE} → {PATENGA} at {SPEED_KMH} km/h");
    println!();

    // 1. Deterministic stepping: no threads, no clock.
    let journey = Journey {
        start:      ANCHORAGE,
        end:        PATENGA,
        speed_kmh:  SPEED_KMH,
        refresh_hz: REFRESH_HZ,
    };
    let mut transit = Transit::new(journey)?;
    println!(
        "distance {:.1} km, travel time {:.0} s, heading {:.1}°",
        transit.distance_km(),
        transit.travel_secs(),
        transit.heading_deg(),
    );

    println!("deterministic drive, 10 steps:");
    let step = transit.travel_secs() / 10.0;
    let mut printer = SnapshotPrinter;
    printer.on_update(&transit.initial());
    loop {
        let snapshot = transit.advance(step);
        printer.on_update(&snapshot);
        if snapshot.completed {
            break;
        }
    }
    println!();

    // 2. Real time, accelerated so arrival is seconds away.
    println!("real-time drive at {DEMO_SPEEDUP}x speed:");
    let sped_up = Journey {
        speed_kmh: SPEED_KMH * DEMO_SPEEDUP,
        ..journey
    };
    let mut handle = scheduler::start(sped_up, SnapshotPrinter)?;
    handle.wait();

    Ok(())
}
