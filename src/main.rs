use std::io::{self, BufRead, Write};

use anyhow::{anyhow, bail, Context};
use log::{error, info};
use skiplist::{default::DEFAULT_MAX_LEVELS, default::DEFAULT_SEED, Config, Session, SkipList};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .init();
    let config = Config::default().set_seed(DEFAULT_SEED);
    match std::env::args().nth(1).as_deref() {
        None | Some("demo") => demo(config),
        Some("repl") => repl(config),
        Some(other) => bail!("unknown mode {:?}, expected `demo` or `repl`", other),
    }
}

fn demo(config: Config) -> anyhow::Result<()> {
    let mut list = SkipList::with_config(config.set_max_levels(DEFAULT_MAX_LEVELS))?;
    for i in 0..15u8 {
        list.insert(i as i32 + 1, (b'A' + i) as char)?;
    }
    print!("{}", list);

    list.delete(7);
    print!("{}", list);

    match list.search(11) {
        Some(data) => println!("Element with key: {} has data: {}", 11, data),
        None => println!("Element with key: {} not found", 11),
    }
    info!("released {} nodes", list.clear());
    Ok(())
}

const USAGE: &str = "create <levels> | insert <key> <char> | search <key> | delete <key> | \
                     display | levels | len | clear | destroy | exit";

fn repl(config: Config) -> anyhow::Result<()> {
    let mut session = Session::new(config);
    println!("Skip list REPL. Commands: {}", USAGE);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let mut parts = line.split_whitespace();
        let command = match parts.next() {
            Some(cmd) => cmd,
            None => continue,
        };
        if command == "exit" {
            println!("Exiting REPL...");
            break;
        }
        let args: Vec<&str> = parts.collect();
        if let Err(e) = execute(&mut session, command, &args) {
            error!("{}: {:#}", command, e);
        }
    }
    Ok(())
}

fn execute(session: &mut Session, command: &str, args: &[&str]) -> anyhow::Result<()> {
    match command {
        "create" => {
            let levels = parse_arg::<usize>(args, 0, "levels")?;
            session.create(levels)?;
            println!("Created list with {} levels", levels);
        }
        "insert" => {
            let key = parse_arg::<i32>(args, 0, "key")?;
            let value = parse_arg::<char>(args, 1, "char")?;
            match session.insert(key, value)? {
                Some(old) => println!("Updated key {}: {} -> {}", key, old, value),
                None => println!("Inserted key {}", key),
            }
        }
        "search" => {
            let key = parse_arg::<i32>(args, 0, "key")?;
            match session.search(key)? {
                Some(data) => println!("Element with key: {} has data: {}", key, data),
                None => println!("Element with key: {} not found", key),
            }
        }
        "delete" => {
            let key = parse_arg::<i32>(args, 0, "key")?;
            match session.delete(key)? {
                Some(data) => println!("Deleted key {} ({})", key, data),
                None => println!("Key {} not present", key),
            }
        }
        "display" => print!("{}", session.display()?),
        "levels" => {
            for (level, keys) in session.levels()?.iter().enumerate().rev() {
                println!("{:2}  {:?}", level, keys);
            }
        }
        "len" => println!("{}", session.len()?),
        "clear" => println!("Released {} nodes", session.clear()?),
        "destroy" => println!("Released {} nodes", session.destroy()?),
        _ => bail!("invalid command, try {}", USAGE),
    }
    Ok(())
}

fn parse_arg<T>(args: &[&str], index: usize, name: &str) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw = args
        .get(index)
        .ok_or_else(|| anyhow!("missing <{}>", name))?;
    raw.parse::<T>()
        .with_context(|| format!("invalid <{}> {:?}", name, raw))
}
