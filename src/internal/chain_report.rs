#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::indexing_slicing)]
#![allow(clippy::pedantic)]

use chaintable::{HashTable, HashTableExtensions, logger};
use log::info;
use plotters::prelude::*;
use rand::{Rng, distr::Alphanumeric};

// Keys inserted per load factor run
const KEY_COUNT: usize = 20_000;
// Record a data point every SAMPLE_EVERY insertions
const SAMPLE_EVERY: usize = 250;
// Load factor thresholds compared in the charts
const LOAD_FACTORS: [f64; 4] = [0.5, 0.75, 1.5, 3.0];

// Pairs inserted by the walkthrough, before the overwrites
const WALKTHROUGH: [(&str, &str); 12] = [
    ("apple", "red"),
    ("banana", "yellow"),
    ("carrot", "orange"),
    ("dog", "brown"),
    ("elephant", "gray"),
    ("frog", "green"),
    ("grape", "purple"),
    ("hat", "black"),
    ("ice cream", "white"),
    ("jacket", "blue"),
    ("kite", "pink"),
    ("lion", "golden"),
];

/// Chain statistics sampled while filling one table
struct Run {
    load_factor: f64,
    longest_chain: Vec<(usize, f64)>,
    average_chain: Vec<(usize, f64)>,
    final_chains: Vec<usize>,
    resizes: usize,
}

fn walkthrough() -> chaintable::Result<()> {
    let mut table = HashTable::new();

    for (key, value) in WALKTHROUGH {
        table.set(key, value)?;
    }
    println!(
        "{} entries in {} buckets after the initial inserts",
        table.len(),
        table.bucket_count()
    );

    // Overwrite a few entries
    table.set("apple", "green")?;
    table.set("banana", "brown")?;

    // One more key crosses the load factor
    table.set("moon", "silver")?;
    println!("{} buckets after {} resize(s)", table.bucket_count(), table.resize_count());

    println!("get(apple) = {:?}", table.get("apple")?); // Some("green")
    println!("has(carrot) = {}", table.has("carrot")?); // true
    println!("remove(elephant) = {}", table.remove("elephant")?); // true
    println!("length = {}", table.len()); // 12
    println!("keys = {:?}", table.keys());
    println!("values = {:?}", table.values());
    println!("entries = {:?}", table.entries());

    Ok(())
}

fn random_key(rng: &mut impl Rng) -> String {
    let len = rng.random_range(4..16);
    rng.sample_iter(Alphanumeric).take(len).map(char::from).collect()
}

fn fill(load_factor: f64, keys: &[String]) -> chaintable::Result<Run> {
    let mut table = HashTable::with_params(16, load_factor)?;
    let mut longest_chain = Vec::new();
    let mut average_chain = Vec::new();

    for (i, key) in keys.iter().enumerate() {
        table.set(key.as_str(), i)?;

        if (i + 1) % SAMPLE_EVERY == 0 {
            let stats = table.stats();
            let occupied = stats.bucket_count - stats.empty_buckets;
            longest_chain.push((i + 1, stats.longest_chain as f64));
            average_chain.push((i + 1, stats.len as f64 / occupied.max(1) as f64));
        }
    }

    info!(
        "load factor {load_factor}: {} entries, {} buckets, {} resizes",
        table.len(),
        table.bucket_count(),
        table.resize_count()
    );

    Ok(Run {
        load_factor,
        longest_chain,
        average_chain,
        final_chains: table.chain_lengths(),
        resizes: table.resize_count(),
    })
}

fn draw_line_chart(
    path: &str,
    caption: &str,
    y_desc: &str,
    runs: &[Run],
    series: fn(&Run) -> &[(usize, f64)],
    colors: &[RGBColor],
) -> Result<(), Box<dyn std::error::Error>> {
    let font_family = "sans-serif";
    let root = BitMapBackend::new(path, (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_y = runs
        .iter()
        .flat_map(|run| series(run).iter().map(|&(_, y)| y))
        .fold(0.0, f64::max) *
        1.1; // Add 10% margin

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, (font_family, 35))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(0..KEY_COUNT, 0.0..max_y.max(1.0))?;

    chart
        .configure_mesh()
        .x_desc("Number of Keys Inserted")
        .y_desc(y_desc)
        .axis_desc_style((font_family, 16))
        .draw()?;

    for (idx, run) in runs.iter().enumerate() {
        let color = colors[idx % colors.len()];
        let line_style = ShapeStyle::from(&color).stroke_width(2);

        chart
            .draw_series(LineSeries::new(series(run).iter().copied(), line_style))?
            .label(format!("load factor {} ({} resizes)", run.load_factor, run.resizes))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    Ok(())
}

fn draw_histogram(path: &str, run: &Run, color: RGBColor) -> Result<(), Box<dyn std::error::Error>> {
    let font_family = "sans-serif";
    let longest = run.final_chains.iter().copied().max().unwrap_or(0);
    let mut counts = vec![0_usize; longest + 1];
    for &len in &run.final_chains {
        counts[len] += 1;
    }
    let max_count = counts.iter().copied().max().unwrap_or(0) as f64 * 1.1;

    let root = BitMapBackend::new(path, (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Chain Lengths at Load Factor {}", run.load_factor),
            (font_family, 35),
        )
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(-0.5..(longest as f64 + 0.5), 0.0..max_count.max(1.0))?;

    chart
        .configure_mesh()
        .x_desc("Chain Length")
        .y_desc("Buckets")
        .axis_desc_style((font_family, 16))
        .draw()?;

    chart.draw_series(counts.iter().enumerate().map(|(len, &count)| {
        let x = len as f64;
        Rectangle::new([(x - 0.4, 0.0), (x + 0.4, count as f64)], color.filled())
    }))?;

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logger::initialize_logger();

    walkthrough()?;

    // Same keys for every load factor to keep the runs comparable
    let mut rng = rand::rng();
    let keys: Vec<String> = (0..KEY_COUNT).map(|_| random_key(&mut rng)).collect();

    let mut runs = Vec::with_capacity(LOAD_FACTORS.len());
    for load_factor in LOAD_FACTORS {
        runs.push(fill(load_factor, &keys)?);
    }

    let colors = [
        RGBColor(220, 50, 50),  // Bright red
        RGBColor(50, 90, 220),  // Bright blue
        RGBColor(50, 180, 50),  // Bright green
        RGBColor(180, 50, 180), // Bright magenta
    ];

    draw_line_chart(
        "longest_chain.png",
        "Longest Chain While Filling",
        "Longest Chain (entries)",
        &runs,
        |run| run.longest_chain.as_slice(),
        &colors,
    )?;
    draw_line_chart(
        "average_chain.png",
        "Average Occupied Chain While Filling",
        "Average Chain (entries)",
        &runs,
        |run| run.average_chain.as_slice(),
        &colors,
    )?;
    if let Some(default_run) = runs.iter().find(|run| (run.load_factor - 0.75).abs() < f64::EPSILON) {
        draw_histogram("chain_length_histogram.png", default_run, colors[1])?;
    }

    println!(
        "Generated plot images: longest_chain.png, average_chain.png, chain_length_histogram.png"
    );

    Ok(())
}
