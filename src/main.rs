use std::time::Duration;

use log::LevelFilter;

use gyro_tank::experiments;
use gyro_tank::status::logger;
use gyro_tank::{load_config, BoundedDuration, CycleMetrics, SimLeds, SimulatedRobot, StatusLog};

fn main() {
    println!("===========================================");
    println!("Gyro Tank - heading control demo (simulated)");
    println!("===========================================\n");

    logger::init(LevelFilter::Info).expect("logger init failed");

    // Load runtime tuning, then shorten the delays so the demo finishes in
    // about a second; real hardware wants the defaults.
    let mut cfg = load_config("config/robot.toml");
    cfg.calibration_settle_ms = [50, 10];
    cfg.cycle_delay_ms = 1;
    cfg.follow_ms = 500;

    let status = StatusLog::new(200);
    let metrics = CycleMetrics::new();

    // --- gyro move: pivot to the target heading, then PID-follow it ------
    println!("--- gyro move ---");
    let robot = SimulatedRobot::new(42);
    let (mut tank, gyro) = robot.split();

    match experiments::gyro_move(&mut tank, gyro, &cfg, &status, &metrics) {
        Ok(()) => println!(
            "gyro move finished at {:.1} deg (target {:.1})\n",
            robot.heading(),
            cfg.target_angle
        ),
        Err(fault) => println!("gyro move faulted: {}\n", fault),
    }

    // --- gyro rotate: pivot only, on a fresh robot -----------------------
    println!("--- gyro rotate ---");
    let robot = SimulatedRobot::new(43);
    let (mut tank, gyro) = robot.split();

    let gyro = experiments::gyro_rotate(&mut tank, gyro, &cfg, &status);
    println!("gyro rotate finished at {:.1} deg\n", gyro.angle());

    // --- gyro test: veering display against a drifting sensor ------------
    println!("--- gyro test ---");
    let robot = SimulatedRobot::new(44);
    let (_tank, gyro) = robot.split();
    robot.set_noise(2.5);
    let mut leds = SimLeds::new();

    let mut policy = BoundedDuration::from_ms(100);
    experiments::gyro_test(
        gyro,
        &mut leds,
        &cfg,
        &status,
        &mut policy,
        Duration::from_millis(10),
    );
    println!("gyro test done, LEDs ended as {:?}/{:?}\n", leds.left, leds.right);

    // --- summary ----------------------------------------------------------
    println!("===========================================");
    println!("Status log (last 10 entries):");
    for line in status.tail(10) {
        println!("  {}", line);
    }

    let report = metrics.report();
    println!("\nFollow loop: {} cycles", report.cycles);
    println!(
        "  cycle  p50 {:>10.2?}   p99 {:>10.2?}",
        report.cycle_p50, report.cycle_p99
    );
    println!(
        "  jitter p50 {:>10.2?}   p99 {:>10.2?}",
        report.jitter_p50, report.jitter_p99
    );
}
