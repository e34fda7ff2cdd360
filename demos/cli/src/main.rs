use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use timeline_core::{TimelineConfig, TimelineWidget};
use timeline_data::{default_periods, periods_from_str};

#[derive(Parser, Debug)]
#[command(
    name = "timeline-cli",
    about = "Print the state of the historical timeline block as text."
)]
struct Args {
    /// JSON file with a period list; the built-in dataset is used otherwise.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// JSON file with a (partial) timeline config.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Dial control to activate, counted from 1.
    #[arg(short, long, default_value_t = 1)]
    select: usize,

    /// Viewport width in CSS pixels.
    #[arg(short, long, default_value_t = 1024)]
    width: u32,

    /// Carousel page to show, counted from 1.
    #[arg(short, long, default_value_t = 1)]
    page: usize,

    /// Fail when two events of a period share year and title.
    #[arg(long)]
    strict: bool,

    /// Also print the year readout's entrance transition frame by frame.
    #[arg(long)]
    frames: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => {
            let data = std::fs::read_to_string(path)
                .with_context(|| format!("could not read config {:?}", path))?;
            serde_json::from_str::<TimelineConfig>(&data)
                .with_context(|| format!("invalid config {:?}", path))?
        }
        None => TimelineConfig::default(),
    };
    config.reject_duplicate_keys |= args.strict;

    let periods = match &args.input {
        Some(path) => {
            let data = std::fs::read_to_string(path)
                .with_context(|| format!("could not read file {:?}", path))?;
            periods_from_str(&data, &config)?
        }
        None => default_periods(&config)?,
    };

    if args.select == 0 || args.page == 0 {
        bail!("--select and --page count from 1");
    }

    let mut widget = TimelineWidget::with_viewport(periods, config, args.width);
    log::info!(
        "{} periods, viewport {}px, {} cards per view",
        widget.periods().len(),
        widget.viewport_width(),
        widget.carousel().per_view()
    );
    widget.select(args.select - 1)?;
    widget.go_to_page(args.page - 1);

    print_dial(&widget);
    print_readout(&widget, args.frames);
    print_carousel(&widget);

    Ok(())
}

fn print_dial(widget: &TimelineWidget) {
    println!("{}", widget.config().heading);
    println!();
    for dot in widget.dial() {
        println!(
            "{} {:>2}. {:<24} left {:>7.2}  top {:>7.2}",
            if dot.active { ">" } else { " " },
            dot.ordinal(),
            dot.label,
            dot.position.left,
            dot.position.top
        );
    }
    println!();
}

fn print_readout(widget: &TimelineWidget, frames: bool) {
    let [start, end] = widget.years();
    println!("Years: {start} - {end}");

    if frames {
        let transition = widget.config().transition;
        let total = transition.total_duration(2);
        let mut elapsed = 0.0;
        while elapsed <= total + f64::EPSILON {
            let first = transition.sample(0, elapsed);
            let second = transition.sample(1, elapsed);
            println!(
                "  t={elapsed:.2}s  {start}: y {:>5.1} a {:.2}  {end}: y {:>5.1} a {:.2}",
                first.y, first.opacity, second.y, second.opacity
            );
            elapsed += 0.05;
        }
    }
    println!();
}

fn print_carousel(widget: &TimelineWidget) {
    let carousel = widget.carousel();
    println!(
        "Events {}/{} ({} per view, page {} of {})",
        carousel.visible_range().len(),
        carousel.slide_count(),
        carousel.per_view(),
        carousel.page() + 1,
        carousel.page_count()
    );
    for event in widget.visible_events() {
        println!("  [{}] {}", event.year, event.title);
        println!("        {}", event.description);
    }
    println!(
        "  {} prev | next {}",
        if carousel.can_prev() { "<" } else { " " },
        if carousel.can_next() { ">" } else { " " }
    );
}
