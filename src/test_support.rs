//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use crate::core::print::{PrintHost, PrintSurface};
use crate::core::rows::{DEFAULT_ROLE, Row, RowStore};
use crate::core::state::App;

/// What a `MemoryHost` surface received.
#[derive(Debug, Default, Clone)]
pub struct Page {
    pub content: String,
    pub closed: bool,
    pub printed: bool,
}

/// A print host that keeps every surface in memory.
#[derive(Default)]
pub struct MemoryHost {
    pub pages: Rc<RefCell<Vec<Page>>>,
    pub fail_print: bool,
}

impl PrintHost for MemoryHost {
    fn open(&mut self) -> io::Result<Box<dyn PrintSurface>> {
        let mut pages = self.pages.borrow_mut();
        pages.push(Page::default());
        Ok(Box::new(MemorySurface {
            pages: Rc::clone(&self.pages),
            index: pages.len() - 1,
            fail_print: self.fail_print,
        }))
    }
}

struct MemorySurface {
    pages: Rc<RefCell<Vec<Page>>>,
    index: usize,
    fail_print: bool,
}

impl PrintSurface for MemorySurface {
    fn write(&mut self, markup: &str) -> io::Result<()> {
        self.pages.borrow_mut()[self.index].content.push_str(markup);
        Ok(())
    }

    fn close(&mut self) -> io::Result<()> {
        self.pages.borrow_mut()[self.index].closed = true;
        Ok(())
    }

    fn print(&mut self) -> io::Result<()> {
        if self.fail_print {
            return Err(io::Error::other("printer on fire"));
        }
        self.pages.borrow_mut()[self.index].printed = true;
        Ok(())
    }
}

/// A host that refuses to open anything, like a blocked popup.
pub struct RefusingHost;

impl PrintHost for RefusingHost {
    fn open(&mut self) -> io::Result<Box<dyn PrintSurface>> {
        Err(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "surface blocked by host",
        ))
    }
}

/// Rows named A..D with matching ids.
pub fn abcd_rows() -> Vec<Row> {
    ["A", "B", "C", "D"]
        .iter()
        .map(|n| Row::new(*n, *n).with_role(DEFAULT_ROLE))
        .collect()
}

/// Creates a test App seeded with the default four rows.
pub fn test_app() -> App {
    App::new(RowStore::default(), "Test Table".to_string())
}
