//! yh: CLI for the upper-section dice hold planner.
//!
//! Subcommands:
//! - strategy
//! - holds
//! - score
//! - expected
//! - sim

use std::env;
use std::fmt::Display;
use std::process;

use yh_core::sim::score_histogram;
use yh_core::{
    expected_value, parse_dice, score, simulate_with, validate_faces, validate_hand, ChanceKind,
    Config, Face, HoldEval, Planner, RULESET_ID,
};
use yh_logging::{
    now_ms, DecisionEventV1, NdjsonWriter, SimSummaryEventV1, TurnEventV1, VersionInfoV1,
};

fn exit_with(msg: impl Display) -> ! {
    eprintln!("{msg}");
    process::exit(1);
}

/// Value following the flag at `args[i]`.
fn flag_value<'a>(args: &'a [String], i: usize) -> &'a str {
    match args.get(i + 1) {
        Some(v) => v,
        None => exit_with(format!("Missing value for {}", args[i])),
    }
}

fn parse_num<T: std::str::FromStr>(flag: &str, value: &str) -> T {
    value
        .parse()
        .unwrap_or_else(|_| exit_with(format!("Invalid {flag} value: {value}")))
}

fn parse_dice_arg(flag: &str, value: &str) -> Vec<Face> {
    parse_dice(value).unwrap_or_else(|e| exit_with(format!("Invalid {flag}: {e}")))
}

fn load_config(path: Option<&str>) -> Config {
    match path {
        Some(p) => {
            Config::load(p).unwrap_or_else(|e| exit_with(format!("Failed to load config: {e}")))
        }
        None => Config::default(),
    }
}

fn open_log(path: Option<&str>, flush_every: u64) -> Option<NdjsonWriter> {
    path.map(|p| {
        NdjsonWriter::open_append_with_flush(p, flush_every)
            .unwrap_or_else(|e| exit_with(format!("Failed to open event log {p}: {e}")))
    })
}

fn fmt_dice(dice: &[Face]) -> String {
    yh_core::Hold::from_dice(dice).to_string()
}

fn print_ranked(ranked: &[HoldEval], top: usize, to_stderr: bool) {
    let mut lines = vec![format!(
        "{:>4}  {:<20} {:>5}  {:>10}",
        "rank", "hold", "free", "expected"
    )];
    for (i, e) in ranked.iter().take(top).enumerate() {
        lines.push(format!(
            "{:>4}  {:<20} {:>5}  {:>10.4}",
            i + 1,
            e.hold.to_string(),
            e.num_free_dice,
            e.expected_value
        ));
    }
    for l in lines {
        if to_stderr {
            eprintln!("{l}");
        } else {
            println!("{l}");
        }
    }
}

/// Shared options for `strategy` and `holds`.
struct PlanArgs {
    hand: Vec<Face>,
    config: Config,
    log: Option<String>,
    top: usize,
}

fn parse_plan_args(cmd: &str, usage: &str, args: &[String]) -> Option<PlanArgs> {
    let mut hand: Option<Vec<Face>> = None;
    let mut sides: Option<u8> = None;
    let mut config_path: Option<String> = None;
    let mut log: Option<String> = None;
    let mut top = usize::MAX;
    let mut debug = false;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                println!("{usage}");
                return None;
            }
            "--hand" => {
                hand = Some(parse_dice_arg("--hand", flag_value(args, i)));
                i += 2;
            }
            "--sides" => {
                sides = Some(parse_num("--sides", flag_value(args, i)));
                i += 2;
            }
            "--config" => {
                config_path = Some(flag_value(args, i).to_string());
                i += 2;
            }
            "--log" => {
                log = Some(flag_value(args, i).to_string());
                i += 2;
            }
            "--top" => {
                top = parse_num("--top", flag_value(args, i));
                i += 2;
            }
            "--debug" => {
                debug = true;
                i += 1;
            }
            other => {
                eprintln!("Unknown option for `yh {cmd}`: {other}");
                exit_with(format!("Run `yh {cmd} --help` for usage."));
            }
        }
    }

    let Some(hand) = hand else {
        exit_with("Missing --hand");
    };
    let mut config = load_config(config_path.as_deref());
    if let Some(s) = sides {
        config.dice.num_die_sides = s;
    }
    config.logging.debug |= debug;
    let log = log.or_else(|| config.logging.events_path.clone());

    Some(PlanArgs {
        hand,
        config,
        log,
        top,
    })
}

fn rank(p: &PlanArgs) -> Vec<HoldEval> {
    let planner = Planner::new(p.config.strategy.clone());
    planner
        .rank_holds(&p.hand, p.config.dice.num_die_sides)
        .unwrap_or_else(|e| exit_with(format!("Planning failed: {e}")))
}

fn log_decision(p: &PlanArgs, ranked: &[HoldEval]) {
    let Some(mut w) = open_log(p.log.as_deref(), p.config.logging.flush_every) else {
        return;
    };
    let best = &ranked[0];
    let ev = DecisionEventV1 {
        event: "decision",
        ts_ms: now_ms(),
        v: VersionInfoV1::new(RULESET_ID),
        hand: p.hand.clone(),
        num_die_sides: p.config.dice.num_die_sides,
        hold: best.hold.dice().to_vec(),
        expected_value: best.expected_value,
        holds_considered: ranked.len(),
    };
    if let Err(e) = w.write_event(&ev).and_then(|_| w.flush()) {
        exit_with(format!("Failed to write event log: {e}"));
    }
}

const STRATEGY_USAGE: &str = r#"yh strategy

USAGE:
    yh strategy --hand 1,1,1,5,6 [--sides N] [--config PATH] [--log PATH] [--debug]

OPTIONS:
    --hand DICE      Comma-separated dice (required)
    --sides N        Sides per die (default: config dice.num_die_sides, 6)
    --config PATH    YAML config
    --log PATH       Append a decision event (NDJSON)
    --debug          Print every evaluated hold to stderr
"#;

fn cmd_strategy(args: &[String]) {
    let Some(p) = parse_plan_args("strategy", STRATEGY_USAGE, args) else {
        return;
    };
    let ranked = rank(&p);
    if p.config.logging.debug {
        print_ranked(&ranked, p.top, true);
    }
    log_decision(&p, &ranked);

    let best = &ranked[0];
    println!(
        "Best strategy for hand {} is to hold {} with expected score {:.4}",
        fmt_dice(&p.hand),
        best.hold,
        best.expected_value
    );
}

const HOLDS_USAGE: &str = r#"yh holds

USAGE:
    yh holds --hand 1,1,1,5,6 [--sides N] [--top N] [--config PATH] [--log PATH]

OPTIONS:
    --hand DICE      Comma-separated dice (required)
    --sides N        Sides per die (default: 6)
    --top N          Only print the N best holds
    --config PATH    YAML config
    --log PATH       Append a decision event (NDJSON)
"#;

fn cmd_holds(args: &[String]) {
    let Some(p) = parse_plan_args("holds", HOLDS_USAGE, args) else {
        return;
    };
    let ranked = rank(&p);
    log_decision(&p, &ranked);
    println!("{} distinct holds for {}", ranked.len(), fmt_dice(&p.hand));
    print_ranked(&ranked, p.top, false);
}

fn cmd_score(args: &[String]) {
    let mut hand: Option<Vec<Face>> = None;
    let mut sides: u8 = 6;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                println!(
                    r#"yh score

USAGE:
    yh score --hand 2,2,2,2,2 [--sides N]

Prints the best upper-section score: max over faces of face * count.
"#
                );
                return;
            }
            "--hand" => {
                hand = Some(parse_dice_arg("--hand", flag_value(args, i)));
                i += 2;
            }
            "--sides" => {
                sides = parse_num("--sides", flag_value(args, i));
                i += 2;
            }
            other => {
                eprintln!("Unknown option for `yh score`: {other}");
                exit_with("Run `yh score --help` for usage.");
            }
        }
    }

    let Some(hand) = hand else {
        exit_with("Missing --hand");
    };
    if let Err(e) = validate_hand(&hand, sides) {
        exit_with(format!("Invalid hand: {e}"));
    }
    println!("{}", score(&hand));
}

fn cmd_expected(args: &[String]) {
    let mut hold: Vec<Face> = Vec::new();
    let mut free: Option<usize> = None;
    let mut sides: Option<u8> = None;
    let mut config_path: Option<String> = None;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                println!(
                    r#"yh expected

USAGE:
    yh expected --free N [--hold 1,1,1] [--sides N] [--config PATH]

OPTIONS:
    --hold DICE      Dice kept (default: none)
    --free N         Number of dice rerolled (required)
    --sides N        Sides per die (default: config dice.num_die_sides, 6)
    --config PATH    YAML config; strategy.max_free_dice caps --free (default: 8)
"#
                );
                return;
            }
            "--hold" => {
                hold = parse_dice_arg("--hold", flag_value(args, i));
                i += 2;
            }
            "--free" => {
                free = Some(parse_num("--free", flag_value(args, i)));
                i += 2;
            }
            "--sides" => {
                sides = Some(parse_num("--sides", flag_value(args, i)));
                i += 2;
            }
            "--config" => {
                config_path = Some(flag_value(args, i).to_string());
                i += 2;
            }
            other => {
                eprintln!("Unknown option for `yh expected`: {other}");
                exit_with("Run `yh expected --help` for usage.");
            }
        }
    }

    let Some(free) = free else {
        exit_with("Missing --free");
    };
    let config = load_config(config_path.as_deref());
    let sides = sides.unwrap_or(config.dice.num_die_sides);
    if let Err(e) = config.strategy.check_free_dice(free) {
        exit_with(format!("Invalid input: {e}"));
    }
    if let Err(e) = validate_faces(&hold, sides) {
        exit_with(format!("Invalid hold: {e}"));
    }
    match expected_value(&hold, sides, free) {
        Ok(ev) => println!("{ev:.6}"),
        Err(e) => exit_with(format!("Invalid input: {e}")),
    }
}

fn print_histogram(scores: &[u32]) {
    let hist = score_histogram(scores);
    let peak = hist.iter().map(|&(_, c)| c).max().unwrap_or(1);
    println!();
    println!("Score histogram:");
    for (s, c) in hist {
        let bar = "#".repeat((c * 50).div_ceil(peak));
        println!("  {s:>4} {c:>7} {bar}");
    }
}

fn cmd_sim(args: &[String]) {
    let mut config_path: Option<String> = None;
    let mut games: Option<u32> = None;
    let mut seed: Option<u64> = None;
    let mut rerolls: Option<u32> = None;
    let mut chance: Option<ChanceKind> = None;
    let mut log: Option<String> = None;
    let mut no_hist = false;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                println!(
                    r#"yh sim

USAGE:
    yh sim [--games N] [--seed S] [--rerolls R] [--chance deterministic|rng] [--config PATH] [--log PATH] [--no-hist]

OPTIONS:
    --games N       Number of turns to simulate (default: 1000)
    --seed S        Dice seed (default: 0)
    --rerolls R     Rerolls per turn (default: 1)
    --chance MODE   deterministic (event-keyed) or rng (default: deterministic)
    --config PATH   YAML config
    --log PATH      Append turn and summary events (NDJSON)
    --no-hist       Skip printing histogram
"#
                );
                return;
            }
            "--config" => {
                config_path = Some(flag_value(args, i).to_string());
                i += 2;
            }
            "--games" => {
                games = Some(parse_num("--games", flag_value(args, i)));
                i += 2;
            }
            "--seed" => {
                seed = Some(parse_num("--seed", flag_value(args, i)));
                i += 2;
            }
            "--rerolls" => {
                rerolls = Some(parse_num("--rerolls", flag_value(args, i)));
                i += 2;
            }
            "--chance" => {
                chance = Some(match flag_value(args, i) {
                    "deterministic" => ChanceKind::Deterministic,
                    "rng" => ChanceKind::Rng,
                    other => exit_with(format!(
                        "invalid --chance: {other} (expected deterministic|rng)"
                    )),
                });
                i += 2;
            }
            "--log" => {
                log = Some(flag_value(args, i).to_string());
                i += 2;
            }
            "--no-hist" => {
                no_hist = true;
                i += 1;
            }
            other => {
                eprintln!("Unknown option for `yh sim`: {other}");
                exit_with("Run `yh sim --help` for usage.");
            }
        }
    }

    let mut config = load_config(config_path.as_deref());
    if let Some(g) = games {
        config.sim.games = g;
    }
    if let Some(s) = seed {
        config.sim.seed = s;
    }
    if let Some(r) = rerolls {
        config.sim.rerolls = r;
    }
    if let Some(c) = chance {
        config.sim.chance = c;
    }
    if let Err(e) = config.validate() {
        exit_with(e);
    }

    let log = log.or_else(|| config.logging.events_path.clone());
    let mut writer = open_log(log.as_deref(), config.logging.flush_every);
    let mut log_err = None;

    let planner = Planner::new(config.strategy.clone());
    let report = simulate_with(&planner, &config.dice, &config.sim, |turn| {
        let Some(w) = writer.as_mut() else {
            return;
        };
        if log_err.is_some() {
            return;
        }
        let ev = TurnEventV1 {
            event: "turn",
            ts_ms: now_ms(),
            v: VersionInfoV1::new(RULESET_ID),
            game: turn.game,
            opening: turn.opening.clone(),
            holds: turn.decisions.iter().map(|d| d.hold.dice().to_vec()).collect(),
            final_hand: turn.final_hand.clone(),
            score: turn.score,
            opening_expected_value: turn.opening_expected_value(),
        };
        if let Err(e) = w.write_event(&ev) {
            log_err = Some(e);
        }
    })
    .unwrap_or_else(|e| exit_with(format!("Simulation failed: {e}")));

    if let Some(e) = log_err {
        exit_with(format!("Failed to write event log: {e}"));
    }

    let s = &report.summary;
    if let Some(w) = writer.as_mut() {
        let ev = SimSummaryEventV1 {
            event: "sim_summary",
            ts_ms: now_ms(),
            v: VersionInfoV1::new(RULESET_ID),
            games: report.scores.len() as u64,
            seed: config.sim.seed,
            rerolls: config.sim.rerolls,
            chance: match config.sim.chance {
                ChanceKind::Deterministic => "deterministic".to_string(),
                ChanceKind::Rng => "rng".to_string(),
            },
            mean: s.mean,
            median: s.median,
            std_dev: s.std_dev,
            min: s.min,
            max: s.max,
            mean_opening_expected_value: report.mean_opening_expected_value,
        };
        if let Err(e) = w.write_event(&ev).and_then(|_| w.flush()) {
            exit_with(format!("Failed to write event log: {e}"));
        }
    }

    println!("Simulation:");
    println!("  - Turns: {}", report.scores.len());
    println!(
        "  - Score: mean={:.2}, median={}, std={:.2}, min={}, max={}",
        s.mean, s.median, s.std_dev, s.min, s.max
    );
    println!(
        "  - Planner expected score at first decision: {:.4}",
        report.mean_opening_expected_value
    );

    if !no_hist {
        print_histogram(&report.scores);
    }
}

fn print_help() {
    eprintln!(
        r#"yh - upper-section dice hold planner

USAGE:
    yh <COMMAND> [OPTIONS]

COMMANDS:
    strategy    Best hold for a hand and its expected score
    holds       Rank every distinct hold of a hand
    score       Upper-section score of a hand
    expected    Expected score of a hold with N rerolled dice
    sim         Simulate turns played with the planner

OPTIONS:
    -h, --help          Print this help message
    -V, --version       Print version

Run `yh <COMMAND> --help` for command options.
"#
    );
}

fn print_version() {
    println!("yh {}", env!("CARGO_PKG_VERSION"));
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_help();
        process::exit(1);
    }

    match args[1].as_str() {
        "--help" | "-h" | "help" => {
            print_help();
        }
        "--version" | "-V" => {
            print_version();
        }
        "strategy" => {
            cmd_strategy(&args[2..]);
        }
        "holds" => {
            cmd_holds(&args[2..]);
        }
        "score" => {
            cmd_score(&args[2..]);
        }
        "expected" => {
            cmd_expected(&args[2..]);
        }
        "sim" => {
            cmd_sim(&args[2..]);
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            eprintln!("Run `yh --help` for usage.");
            process::exit(1);
        }
    }
}
