use crate::api::ace::{Project, TaskRow};
use crate::libs::range::RangeStats;
use crate::libs::report::{self, ReportRow};
use anyhow::Result;
use prettytable::{row, Cell, Row, Table};

pub struct View {}

impl View {
    pub fn projects(projects: &Vec<Project>) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME"]);
        for project in projects {
            table.add_row(row![project.id, project.name]);
        }
        table.printstd();

        Ok(())
    }

    pub fn tasks(tasks: &Vec<TaskRow>) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TASK"]);
        for task in tasks {
            table.add_row(row![task.id, task.resume]);
        }
        table.printstd();

        Ok(())
    }

    pub fn report(rows: &[ReportRow], stats: &RangeStats) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["LINE", "DATE", "CLIENT", "PROJECT", "TASK", "HOURS", "COMMENT"]);
        for cells in report::table_cells(rows) {
            table.add_row(Row::new(cells.iter().map(|cell| Cell::new(cell)).collect()));
        }
        table.printstd();

        println!("\nTotal hours: {:.2}", stats.total_hours);
        println!("Work days:   {}", stats.workdays);
        match stats.average {
            Some(average) => println!("Average:     {:.2} hours/day", average),
            None => println!("Average:     -"),
        }

        Ok(())
    }
}
