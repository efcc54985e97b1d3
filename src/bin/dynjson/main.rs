mod args;

use crate::args::{InputOptions, Options, OutputOptions, Segment};
use anyhow::{anyhow, Context, Result};
use clap::Parser;
use dynjson::{ser::RenderOptions, Source, Value};
use std::io::{self, IsTerminal, Write};

fn deserialize(source: &Source, opts: &InputOptions) -> Result<Value> {
    source
        .read_value(&opts.into())
        .with_context(|| format!("failed to parse JSON from `{}`", source))
}

fn navigate<'a>(value: &'a Value, path: &[Segment]) -> &'a Value {
    let mut current = value;

    for (i, segment) in path.iter().enumerate() {
        if !segment.exists_in(current) {
            let prefix: String = path[..=i].iter().map(ToString::to_string).collect();
            eprintln!("Warning: `{}` not found, selecting null", prefix);
            return segment.select(current);
        }

        current = segment.select(current);
    }

    current
}

fn render(value: &Value, opts: &OutputOptions) -> Result<String> {
    if opts.kind {
        return Ok(value.kind().to_string());
    }

    let render_opts = RenderOptions::from(opts);

    let text = if opts.quoted {
        value.to_json_string(&render_opts)?
    } else {
        value.try_raw_string(&render_opts)?
    };

    Ok(text)
}

fn main() -> Result<()> {
    let opts = Options::parse();

    let source = match opts.source {
        Some(source) => source,
        None if !io::stdin().is_terminal() => Source::Stdin,
        None => return Err(anyhow!("input file or data on stdin expected")),
    };

    let value = deserialize(&source, &opts.input)?;
    let selected = navigate(&value, &opts.path);
    let text = render(selected, &opts.output).context("failed to render value")?;

    let mut stdout = io::stdout().lock();

    match writeln!(stdout, "{}", text) {
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        res => res.context("failed to write to stdout"),
    }
}
