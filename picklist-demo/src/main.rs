mod command;

use std::cell::RefCell;
use std::fs::File;
use std::io::{self, BufRead, Write};
use std::rc::Rc;
use std::time::Instant;

use log::{info, warn};
use picklist::prelude::*;
use serde_json::{json, Value};
use simplelog::{Config, LevelFilter, WriteLogger};

use command::{Command, CommandError, HELP};

/// Rows shown per list, as if rendered in a fixed-height pane.
const VIEWPORT_ROWS: usize = 4;

/// Lists proposed by the pick list, waiting to be applied by the caller.
type Proposed = Rc<RefCell<Option<(Vec<Value>, Vec<Value>)>>>;

fn catalog() -> Vec<Value> {
    [
        ("f230fh0g3", "Bamboo Watch", "Accessories"),
        ("nvklal433", "Black Watch", "Accessories"),
        ("zz21cz3c1", "Blue Band", "Fitness"),
        ("244wgerg2", "Blue T-Shirt", "Clothing"),
        ("h456wer53", "Bracelet", "Accessories"),
        ("av2231fwg", "Brown Purse", "Accessories"),
        ("bib36pfvm", "Chakra Bracelet", "Accessories"),
        ("mbvjkgip5", "Galaxy Earrings", "Accessories"),
    ]
    .into_iter()
    .map(|(code, name, category)| json!({"code": code, "name": name, "category": category}))
    .collect()
}

/// Load items from a JSON array file, or fall back to the built-in catalog.
fn load_items(path: Option<String>) -> Vec<Value> {
    let Some(path) = path else {
        return catalog();
    };
    match File::open(&path).map_err(|e| e.to_string()).and_then(|file| {
        serde_json::from_reader::<_, Vec<Value>>(file).map_err(|e| e.to_string())
    }) {
        Ok(items) => items,
        Err(e) => {
            warn!("could not load {}: {}", path, e);
            eprintln!("Could not load {}: {}; using built-in catalog", path, e);
            catalog()
        }
    }
}

fn build(items: Vec<Value>, proposed: &Proposed) -> PickList<Value> {
    let config = PickListConfig::new()
        .data_key("code")
        .filter_by("name,category");
    let sink = Rc::clone(proposed);

    PickList::new(config)
        .with_lists(items, Vec::new())
        .on_change(move |event| {
            info!(
                "change: {} source / {} target",
                event.source.len(),
                event.target.len()
            );
            *sink.borrow_mut() = Some((event.source.clone(), event.target.clone()));
        })
        .on_move_to_target(|event| info!("moving {} to target", event.value.len()))
        .on_move_all_to_target(|event| info!("moving all {} to target", event.value.len()))
        .on_move_to_source(|event| info!("moving {} to source", event.value.len()))
        .on_move_all_to_source(|event| info!("moving all {} to source", event.value.len()))
}

fn find(picklist: &PickList<Value>, role: ListRole, name: &str) -> Result<Value, CommandError> {
    picklist
        .list(role)
        .iter()
        .find(|item| {
            // Names are single words on the command line, so "BlueBand" finds "Blue Band".
            item.field("name").is_some_and(|label| {
                label.eq_ignore_ascii_case(name)
                    || label.replace(' ', "").eq_ignore_ascii_case(name)
            })
        })
        .cloned()
        .ok_or_else(|| CommandError::NoSuchItem(name.to_string(), role))
}

/// Run one command. Returns false when the shell should exit.
fn execute(picklist: &mut PickList<Value>, command: Command) -> Result<bool, CommandError> {
    match command {
        Command::Quit => return Ok(false),
        Command::Help => println!("{}", HELP),
        Command::Show => {}
        Command::Click { role, name, ctrl } => {
            let item = find(picklist, role, &name)?;
            let modifiers = if ctrl { Modifiers::CTRL } else { Modifiers::NONE };
            picklist.click_item(role, &item, OriginalEvent::click_with(modifiers));
        }
        Command::Select { role, names } => {
            let items = names
                .iter()
                .map(|name| find(picklist, role, name))
                .collect::<Result<Vec<_>, _>>()?;
            picklist.change_selection(role, items, OriginalEvent::programmatic());
        }
        Command::Filter { role, query } => {
            picklist.change_filter(role, query, OriginalEvent::text());
        }
        Command::Reorder { role, direction } => {
            if picklist.reorder(role, direction, OriginalEvent::key()).is_none() {
                println!("Nothing selected in the {} list", role);
            }
        }
        Command::Move { direction } => {
            if !picklist.transfer_named(&direction, OriginalEvent::key()) {
                println!("Unknown direction {:?}, nothing moved", direction);
            }
        }
    }
    Ok(true)
}

/// Apply proposed lists, render, then run post-render scrolling.
fn render(picklist: &mut PickList<Value>, proposed: &Proposed) {
    if let Some((source, target)) = proposed.borrow_mut().take() {
        picklist.set_lists(source, target);
    }

    for role in [ListRole::Source, ListRole::Target] {
        picklist.sync_layout(role, VIEWPORT_ROWS);
    }

    if let Some(effect) = picklist.after_render(Instant::now()) {
        // A deferred scroll only needs to wait for layout to settle.
        let due = Instant::now() + effect.delay.unwrap_or_default();
        picklist.take_scroll_request(effect.role, due);
    }

    for role in [ListRole::Source, ListRole::Target] {
        print_list(picklist, role);
    }
}

fn print_list(picklist: &PickList<Value>, role: ListRole) {
    let visible = picklist.visible(role);
    let scroll = picklist.scroll(role);
    let filter = picklist.filter_value(role);

    print!("{} ({}/{})", role, visible.len(), picklist.list(role).len());
    if !filter.is_empty() {
        print!(" filter {:?}", filter);
    }
    println!();

    for (index, item) in visible
        .iter()
        .enumerate()
        .skip(scroll.offset)
        .take(VIEWPORT_ROWS)
    {
        let marker = if picklist.is_selected(role, item) { '*' } else { ' ' };
        let name = item.field("name").unwrap_or_default();
        println!("  {}{:>2} {}", marker, index, name);
    }
    if visible.len() > scroll.offset + VIEWPORT_ROWS {
        println!("   ...");
    }
}

fn main() {
    let log_file = File::create("picklist-demo.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let proposed: Proposed = Rc::default();
    let mut picklist = build(load_items(std::env::args().nth(1)), &proposed);
    info!("started pick list {}", picklist.id());

    println!("{}", HELP);
    render(&mut picklist, &proposed);

    let stdin = io::stdin();
    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("Error: {}", e);
                break;
            }
        }

        let outcome = Command::parse(&line).and_then(|command| execute(&mut picklist, command));
        match outcome {
            Ok(true) => render(&mut picklist, &proposed),
            Ok(false) => break,
            Err(CommandError::Empty) => {}
            Err(e) => eprintln!("Error: {}", e),
        }
    }
}
