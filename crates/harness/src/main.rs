use std::env;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use harness::UniformDataset;
use harness::input::parse_sizes;
use harness::report::{render_bar_chart, render_table};
use harness::runner;
use timsort::{DEFAULT_PARAMS, SortContext};

fn main() -> io::Result<ExitCode> {
    let params = DEFAULT_PARAMS;
    println!("==========================");
    println!("min_run = {}", params.min_run);

    let args: Vec<String> = env::args().skip(1).collect();
    let sizes = if args.is_empty() {
        prompt_sizes()?
    } else {
        parse_sizes(&args.join(" "))
    };

    if sizes.is_empty() {
        eprintln!("no valid sizes: expected a list of positive integers");
        return Ok(ExitCode::FAILURE);
    }

    println!("running benchmark...");
    println!("--------------------------");

    let mut source = UniformDataset::from_os_entropy();
    let mut generate = |size: usize| source.generate(size);
    let mut ctx = SortContext::default();

    let mut results = Vec::with_capacity(sizes.len());
    for &size in &sizes {
        let result = runner::run_single(size, params, &mut generate, &mut ctx);
        println!("done: n = {}", result.size);
        results.push(result);
    }

    println!("{}", render_table(&results));
    println!("{}", render_bar_chart(&results));

    Ok(ExitCode::SUCCESS)
}

fn prompt_sizes() -> io::Result<Vec<usize>> {
    print!("data sizes: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(parse_sizes(&line))
}
