use log::{Level, LevelFilter, Log, Metadata, Record};
use ratatui::buffer::Buffer;
use std::{
    sync::{Mutex, Once},
    thread::{self, ThreadId},
};
use tours_lib::tour::{Price, Tour, TourId};

pub fn make_tour(id: &str, name: &str, info: &str) -> Tour {
    Tour {
        id: TourId::new(id),
        name: name.to_string(),
        image: format!("https://images.example.com/{id}.jpeg"),
        info: info.to_string(),
        price: Price::new("10"),
    }
}

pub fn make_tours(count: usize) -> Vec<Tour> {
    (1..=count)
        .map(|i| make_tour(&i.to_string(), &format!("Tour {i}"), "short info"))
        .collect()
}

/// Returns the rendered text of each buffer row, ignoring styles.
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    (0..buf.area.height)
        .map(|y| {
            (0..buf.area.width)
                .map(|x| buf.cell((x, y)).map_or(" ", |c| c.symbol()))
                .collect::<String>()
        })
        .collect()
}

// records from every test thread, tagged with the thread that logged them
static RECORDS: Mutex<Vec<(ThreadId, Level, String)>> = Mutex::new(Vec::new());
static INSTALL: Once = Once::new();

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut records) = RECORDS.lock() {
            records.push((
                thread::current().id(),
                record.level(),
                record.args().to_string(),
            ));
        }
    }

    fn flush(&self) {}
}

/// Runs `f` and returns the messages it logged at `level` on this thread.
pub fn capture_logs(level: Level, f: impl FnOnce()) -> Vec<String> {
    INSTALL.call_once(|| {
        log::set_boxed_logger(Box::new(CaptureLogger)).unwrap();
        log::set_max_level(LevelFilter::Trace);
    });

    let id = thread::current().id();
    RECORDS.lock().unwrap().retain(|(thread, _, _)| *thread != id);

    f();

    RECORDS
        .lock()
        .unwrap()
        .iter()
        .filter(|(thread, l, _)| *thread == id && *l == level)
        .map(|(_, _, msg)| msg.clone())
        .collect()
}
