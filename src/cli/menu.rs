//! `todo menu` - numbered text menu over stdin/stdout

use anyhow::Result;
use std::io::{self, BufRead, Write};

use super::chart;
use super::list::render_table;
use crate::task::{ChartSupport, Priority, TaskStore};

pub fn run(store: &mut TaskStore) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with(
        store,
        stdin.lock(),
        stdout.lock(),
        &ChartSupport::detect(),
    )
}

/// Drive the menu until the user exits or input ends
pub fn run_with<R: BufRead, W: Write>(
    store: &mut TaskStore,
    mut input: R,
    mut out: W,
    support: &ChartSupport,
) -> Result<()> {
    loop {
        writeln!(out)?;
        writeln!(out, "== Task list ==")?;
        writeln!(out, "1) Add a task")?;
        writeln!(out, "2) Delete a task")?;
        writeln!(out, "3) Show tasks")?;
        writeln!(out, "4) Chart tasks by priority")?;
        writeln!(out, "5) Exit")?;

        let Some(choice) = prompt(&mut input, &mut out, "Choose an option: ")? else {
            break;
        };

        match choice.as_str() {
            "1" => {
                let Some(title) = prompt(&mut input, &mut out, "Title: ")? else {
                    break;
                };
                if title.is_empty() {
                    writeln!(out, "Title cannot be empty.")?;
                    continue;
                }
                let Some(description) = prompt(&mut input, &mut out, "Description: ")? else {
                    break;
                };
                let priority = ask_priority(&mut input, &mut out)?;
                let id = store.add_task(&title, &description, priority)?;
                writeln!(out, "Added task {}.", id)?;
            }
            "2" => {
                let Some(raw) = prompt(&mut input, &mut out, "Id of the task to delete: ")? else {
                    break;
                };
                match raw.parse::<u64>() {
                    Ok(id) if store.delete_task(id)? => writeln!(out, "Deleted.")?,
                    Ok(_) => writeln!(out, "No task with that id.")?,
                    Err(_) => writeln!(out, "Invalid id.")?,
                }
            }
            "3" => {
                let tasks = store.list_tasks();
                if tasks.is_empty() {
                    writeln!(out, "No tasks yet.")?;
                } else {
                    write!(out, "{}", render_table(&tasks))?;
                }
            }
            "4" => chart::show(&mut out, &store.priority_counts(), support)?,
            "5" => {
                writeln!(out, "Goodbye!")?;
                break;
            }
            _ => writeln!(out, "Invalid option.")?,
        }
    }

    out.flush()?;
    Ok(())
}

/// 1 = High, 2 = Medium, 3 = Low; anything else (or end of input) is Low
fn ask_priority<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Priority> {
    writeln!(out, "Priority:")?;
    writeln!(out, "1) High   2) Medium   3) Low")?;
    let choice = prompt(input, out, "Your choice (1/2/3): ")?.unwrap_or_default();
    Ok(match choice.as_str() {
        "1" => Priority::High,
        "2" => Priority::Medium,
        _ => Priority::Low,
    })
}

/// Print `label` and read one trimmed line; `None` at end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<Option<String>> {
    write!(out, "{}", label)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{tempdir, TempDir};

    fn store() -> (TempDir, TaskStore) {
        let temp = tempdir().unwrap();
        let store = TaskStore::open(temp.path().join("tasks.csv")).unwrap();
        (temp, store)
    }

    fn drive(store: &mut TaskStore, script: &str) -> String {
        let mut out = Vec::new();
        let support = ChartSupport::Unavailable("test".to_string());
        run_with(store, script.as_bytes(), &mut out, &support).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_add_with_each_priority_choice() {
        let (_temp, mut store) = store();
        drive(
            &mut store,
            "1\nA\n\n1\n1\nB\nsecond\n2\n1\nC\n\n3\n1\nD\n\n9\n5\n",
        );

        let priorities: Vec<Priority> = store.tasks().iter().map(|t| t.priority).collect();
        assert_eq!(
            priorities,
            vec![Priority::High, Priority::Medium, Priority::Low, Priority::Low]
        );
        assert_eq!(store.get(2).map(|t| t.description.as_str()), Some("second"));
    }

    #[test]
    fn test_empty_title_is_rejected() {
        let (_temp, mut store) = store();
        let output = drive(&mut store, "1\n   \n5\n");
        assert!(output.contains("Title cannot be empty."));
        assert!(store.is_empty());
    }

    #[test]
    fn test_delete_paths() {
        let (_temp, mut store) = store();
        store.add_task("x", "", Priority::Low).unwrap();

        let output = drive(&mut store, "2\nabc\n2\n42\n2\n1\n5\n");
        assert!(output.contains("Invalid id."));
        assert!(output.contains("No task with that id."));
        assert!(output.contains("Deleted."));
        assert!(store.is_empty());
    }

    #[test]
    fn test_list_shows_priority_order() {
        let (_temp, mut store) = store();
        store.add_task("low one", "", Priority::Low).unwrap();
        store.add_task("high one", "", Priority::High).unwrap();

        let output = drive(&mut store, "3\n5\n");
        let high = output.find("high one").unwrap();
        let low = output.find("low one").unwrap();
        assert!(high < low);
    }

    #[test]
    fn test_list_empty() {
        let (_temp, mut store) = store();
        let output = drive(&mut store, "3\n5\n");
        assert!(output.contains("No tasks yet."));
    }

    #[test]
    fn test_chart_falls_back_to_text() {
        let (_temp, mut store) = store();
        store.add_task("a", "", Priority::Medium).unwrap();
        let output = drive(&mut store, "4\n5\n");
        assert!(output.contains("Chart unavailable: test"));
        assert!(output.contains("Medium     1 #"));
    }

    #[test]
    fn test_invalid_option_and_end_of_input() {
        let (_temp, mut store) = store();
        let output = drive(&mut store, "x\n");
        assert!(output.contains("Invalid option."));
        assert!(!output.contains("Goodbye!"));
    }

    #[test]
    fn test_exit() {
        let (_temp, mut store) = store();
        let output = drive(&mut store, "5\n1\n");
        assert!(output.ends_with("Goodbye!\n"));
    }
}
