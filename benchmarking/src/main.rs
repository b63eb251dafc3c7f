use buffer_pool_manager::BufMgr;
use clap::Parser;
use common::{DiskManager, FileHandle};
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of frames in the buffer pool
    #[arg(short, long, default_value_t = 100)]
    pool_size: u32,
}

enum BenchmarkType {
    Read,
    Write,
}

struct BenchmarkResult {
    write: Duration,
    read: Duration,
}

fn main() {
    let args = Args::parse();
    println!("Setting up the Buffer Pool Manager for benchmarking.");
    println!("Pool size: {} frames", args.pool_size);

    let db_file = "benchmark.db";
    let file = match DiskManager::new(db_file) {
        Ok(dm) => FileHandle::new(dm),
        Err(e) => {
            eprintln!("Failed to create disk manager: {}", e);
            return;
        }
    };

    let bpm = BufMgr::new(args.pool_size);

    let results = BenchmarkResult {
        write: run_benchmark(&bpm, &file, BenchmarkType::Write),
        read: run_benchmark(&bpm, &file, BenchmarkType::Read),
    };

    println!("\n--- Benchmark Results ---");
    println!("| Implementation | Write Time      | Read Time       |");
    println!("|-----------------|-----------------|-----------------|");
    println!("| BufMgr          | {:<15?} | {:<15?} |", results.write, results.read);

    std::fs::remove_file(db_file).unwrap();
}

fn run_benchmark(bpm: &BufMgr, file: &FileHandle, benchmark_type: BenchmarkType) -> Duration {
    const NUM_PAGES: usize = 1000;

    match benchmark_type {
        BenchmarkType::Write => {
            let start = Instant::now();
            for _ in 0..NUM_PAGES {
                match bpm.alloc_page(file) {
                    Ok((page_no, _page)) => {
                        if let Err(e) = bpm.unpin_page(file, page_no, true) {
                            eprintln!("Failed to unpin page {}: {:?}", page_no, e);
                            return Duration::ZERO;
                        }
                    }
                    Err(e) => {
                        eprintln!("Failed to allocate page: {:?}", e);
                        return Duration::ZERO;
                    }
                }
            }
            start.elapsed()
        }
        BenchmarkType::Read => {
            let mut page_nos = Vec::new();
            for _ in 0..NUM_PAGES {
                match bpm.alloc_page(file) {
                    Ok((page_no, _page)) => {
                        page_nos.push(page_no);
                        if let Err(e) = bpm.unpin_page(file, page_no, true) {
                            eprintln!("Failed to unpin page {}: {:?}", page_no, e);
                            return Duration::ZERO;
                        }
                    }
                    Err(e) => {
                        eprintln!("Failed to allocate page: {:?}", e);
                        return Duration::ZERO;
                    }
                }
            }
            bpm.flush_file(file).unwrap();

            let start = Instant::now();
            for &page_no in &page_nos {
                match bpm.read_page(file, page_no) {
                    Ok(_page) => {
                        let _ = bpm.unpin_page(file, page_no, false);
                    }
                    Err(e) => eprintln!("Failed to fetch page {}: {:?}", page_no, e),
                }
            }
            start.elapsed()
        }
    }
}
