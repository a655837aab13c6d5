//! Bug Runner headless runner
//!
//! Drives the simulation the way a frame loop would (input queue -> tick ->
//! render) without a window, then prints a JSON run summary.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Serialize;

use bug_runner::autopilot::Autopilot;
use bug_runner::consts::MAX_FRAME_DT;
use bug_runner::render::{DrawList, ascii_board, render};
use bug_runner::sim::{GameEvent, GameState, tick};
use bug_runner::{Direction, GameConfig, InputQueue};

#[derive(Parser, Debug)]
#[command(name = "bug-runner", about = "Run a headless Bug Runner session")]
struct Args {
    /// RNG seed (overrides the config seed; random when neither is set)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of frames to simulate
    #[arg(long, default_value_t = 3600)]
    ticks: u64,

    /// Simulated frame rate
    #[arg(long, default_value_t = 60.0)]
    fps: f32,

    /// JSON game config
    #[arg(long)]
    config: Option<PathBuf>,

    /// Moves to replay, one per --move-every frames: L U R D, or '.' to wait.
    /// The script loops until the run ends.
    #[arg(long, conflicts_with = "autopilot")]
    script: Option<String>,

    /// Let the demo bot play
    #[arg(long)]
    autopilot: bool,

    /// Frames between moves
    #[arg(long, default_value_t = 10)]
    move_every: u32,

    /// Log the board every N frames
    #[arg(long)]
    trace_every: Option<u64>,
}

#[derive(Debug, Default, Serialize)]
struct RunSummary {
    seed: u64,
    ticks: u64,
    elapsed_secs: f64,
    moves: u64,
    wins: u64,
    collisions: u64,
    respawns: u64,
    final_row: i32,
    final_column: i32,
}

fn parse_script(script: &str) -> Result<Vec<Option<Direction>>> {
    script
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c.to_ascii_uppercase() {
            'L' => Ok(Some(Direction::Left)),
            'U' => Ok(Some(Direction::Up)),
            'R' => Ok(Some(Direction::Right)),
            'D' => Ok(Some(Direction::Down)),
            '.' => Ok(None),
            other => bail!("unknown script move '{other}' (expected L, U, R, D or '.')"),
        })
        .collect()
}

fn random_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x5eed)
}

/// Where the frame's commands come from
enum Controller {
    Idle,
    Script { moves: Vec<Option<Direction>>, next: usize, move_every: u32 },
    Bot(Autopilot),
}

impl Controller {
    fn poll(&mut self, state: &GameState, frame: u64) -> Option<Direction> {
        match self {
            Controller::Idle => None,
            Controller::Script { moves, next, move_every } => {
                if moves.is_empty() || frame % u64::from(*move_every) != 0 {
                    return None;
                }
                let choice = moves[*next % moves.len()];
                *next += 1;
                choice
            }
            Controller::Bot(bot) => bot.next_move(state),
        }
    }
}

fn run(args: &Args) -> Result<RunSummary> {
    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => GameConfig::default(),
    };
    let seed = args.seed.or(config.seed).unwrap_or_else(random_seed);
    config.seed = Some(seed);

    if !(args.fps.is_finite() && args.fps > 0.0) {
        bail!("--fps must be a positive number");
    }
    let dt = (1.0 / args.fps).min(MAX_FRAME_DT);

    let mut state = GameState::from_config(&config).context("building game state")?;
    let move_every = args.move_every.max(1);
    let mut controller = if args.autopilot {
        Controller::Bot(Autopilot::new(move_every))
    } else if let Some(script) = &args.script {
        Controller::Script {
            moves: parse_script(script)?,
            next: 0,
            move_every,
        }
    } else {
        Controller::Idle
    };

    log::info!("Bug Runner starting: seed {seed}, {} frames at {:.3}s", args.ticks, dt);

    let mut input = InputQueue::new();
    let mut canvas = DrawList::new();
    let mut summary = RunSummary {
        seed,
        ..Default::default()
    };

    for frame in 0..args.ticks {
        if let Some(direction) = controller.poll(&state, frame) {
            input.push_key_up(direction.key_code());
        }
        let commands = input.drain();
        summary.moves += commands.len() as u64;
        state.apply_inputs(commands);

        tick(&mut state, dt);

        canvas.clear();
        render(&state, &mut canvas);

        for event in state.drain_events() {
            match event {
                GameEvent::Win => summary.wins += 1,
                GameEvent::Collision { .. } => summary.collisions += 1,
                GameEvent::EnemyRespawned { .. } => summary.respawns += 1,
            }
        }

        if let Some(every) = args.trace_every.filter(|every| *every > 0) {
            if frame % every == 0 {
                log::info!("frame {frame}\n{}", ascii_board(&state));
            }
        }
    }

    summary.ticks = state.time_ticks;
    summary.elapsed_secs = state.elapsed;
    summary.final_row = state.player.row();
    summary.final_column = state.player.column();
    Ok(summary)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let summary = run(&args)?;
    log::info!(
        "Done: {} wins, {} collisions in {:.1}s",
        summary.wins,
        summary.collisions,
        summary.elapsed_secs
    );
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> Args {
        Args {
            seed: Some(7),
            ticks: 120,
            fps: 60.0,
            config: None,
            script: None,
            autopilot: false,
            move_every: 10,
            trace_every: None,
        }
    }

    #[test]
    fn test_parse_script() {
        let moves = parse_script("U U.l d").unwrap();
        assert_eq!(
            moves,
            vec![
                Some(Direction::Up),
                Some(Direction::Up),
                None,
                Some(Direction::Left),
                Some(Direction::Down),
            ]
        );
        assert!(parse_script("UX").is_err());
    }

    #[test]
    fn test_idle_run() {
        let summary = run(&args()).unwrap();
        assert_eq!(summary.seed, 7);
        assert_eq!(summary.ticks, 120);
        assert_eq!(summary.moves, 0);
        assert_eq!(summary.wins, 0);
        assert_eq!(summary.collisions, 0);
        assert_eq!((summary.final_row, summary.final_column), (5, 2));
    }

    #[test]
    fn test_scripted_run_is_reproducible() {
        let scripted = Args {
            script: Some("UUL.R".to_string()),
            ticks: 600,
            ..args()
        };
        let a = run(&scripted).unwrap();
        let b = run(&scripted).unwrap();
        // 60 polls, every fifth one waits
        assert_eq!(a.moves, 48);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_rejects_bad_fps() {
        let bad = Args { fps: 0.0, ..args() };
        assert!(run(&bad).is_err());
    }
}
