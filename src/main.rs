// Walk through red-black tree balancing from the command line.
//
//   rbtree-steps [--delay-ms N] [--splice-only] [-v] [insert] 10 20 30 delete 20
//
// Numbers are inserted until the word `delete` switches the mode, `insert`
// switches back. Every recolor and rotation is printed as its own step,
// paced by --delay-ms.

use std::{env, process, time::Duration};

use log::{error, info, warn};
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};

use rbtree_steps::{Color, Config, DeleteMode, NodeId, Player, RbTree, Snapshot, Step};

enum Op {
    Insert(i64),
    Delete(i64),
}

struct Args {
    config: Config,
    level: LevelFilter,
    ops: Vec<Op>,
    rejected: Vec<String>,
}

fn parse_args<I>(mut args: I) -> Result<Args, String>
where
    I: Iterator<Item = String>,
{
    let mut config = Config::new("rbtree-steps");
    let (mut level, mut ops, mut deleting) = (LevelFilter::Info, vec![], false);
    let mut rejected = vec![];

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--delay-ms" => {
                let ms = args.next().ok_or("--delay-ms needs a value")?;
                let ms: u64 = ms.parse().map_err(|_| format!("bad delay {:?}", ms))?;
                config.set_step_delay(Duration::from_millis(ms));
            }
            "--splice-only" => {
                config.set_delete_mode(DeleteMode::SpliceOnly);
            }
            "-v" => level = LevelFilter::Debug,
            "insert" => deleting = false,
            "delete" => deleting = true,
            token => match token.parse::<i64>() {
                Ok(key) if deleting => ops.push(Op::Delete(key)),
                Ok(key) => ops.push(Op::Insert(key)),
                Err(_) => rejected.push(token.to_string()),
            },
        }
    }
    Ok(Args {
        config,
        level,
        ops,
        rejected,
    })
}

fn render(step: &Step<i64>) {
    println!("-- {}", step.description());
    let snapshot = step.snapshot();
    if snapshot.root.is_none() {
        println!("   (empty)");
    }
    render_node(snapshot, snapshot.root, step.highlight(), 0);
    println!();
}

// right subtree on top, so the tree reads left to right when tilted.
fn render_node(snapshot: &Snapshot<i64>, id: Option<NodeId>, highlight: &[NodeId], depth: usize) {
    let id = match id {
        Some(id) => id,
        None => return,
    };
    let (left, right) = snapshot.children(id);
    render_node(snapshot, right, highlight, depth + 1);
    if let Some(view) = snapshot.node(id) {
        let color = match view.color {
            Color::Red => 'R',
            Color::Black => 'B',
        };
        let mark = if highlight.contains(&id) { "*" } else { "" };
        println!("   {}{}({}){}", "      ".repeat(depth), view.key, color, mark);
    }
    render_node(snapshot, left, highlight, depth + 1);
}

fn main() {
    let args = match parse_args(env::args().skip(1)) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(2);
        }
    };
    let log_config = simplelog::Config::default();
    if let Err(err) = TermLogger::init(
        args.level,
        log_config,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("logger: {}", err);
    }
    for token in args.rejected.iter() {
        warn!("ignoring {:?}, not a number", token);
    }

    let player = Player::from_config(&args.config);
    let mut tree: RbTree<i64> = RbTree::with_config(args.config);
    for op in args.ops.into_iter() {
        let mut steps: Vec<Step<i64>> = vec![];
        match op {
            Op::Insert(key) => {
                if let Err(err) = tree.insert_observed(key, &mut steps) {
                    info!("{}", err);
                }
            }
            Op::Delete(key) => {
                if tree.delete_observed(&key, &mut steps).is_none() {
                    info!("{} not present", key);
                }
            }
        }
        player.play(steps, render);
    }

    match tree.validate() {
        Ok(stats) => {
            info!("{} entries, black-height {:?}", stats.entries(), stats.blacks());
            if let Some(depths) = stats.depths() {
                depths.log_summary("");
            }
        }
        Err(err) => error!("tree invalid: {}", err),
    }
}
