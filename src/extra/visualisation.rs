use std::fmt::Display;
use std::io;
use std::path::Path;
use svg::node::element::{Group, Rectangle, Text};
use svg::Document;

use crate::abstract_plants::*;
use crate::accumulator::Snapshot;
use crate::plants::pea::*;

pub const BLOCKSIZE: usize = 10;
/// Height in user units of the tallest bar of a chart.
pub const CHART_HEIGHT: usize = 100;

pub trait Draw {
    /// Returns (width, height) of the viewBox needed to contain self.
    fn view_box_size(&self) -> Option<(usize, usize)>;

    fn draw(&self) -> Group;

    fn document(&self) -> Document {
        match self.view_box_size() {
            None => Document::new().add(self.draw()),
            Some((w, h)) => Document::new()
                .set("viewBox", (0, 0, w, h))
                .add(self.draw()),
        }
    }

    fn draw_to_file<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        svg::save(path, &self.document())
    }
}

fn seed_colour(p: &Phenotype) -> &'static str {
    let colour = LOCI
        .iter()
        .zip(p.expressed().iter())
        .find(|(locus, _)| **locus == COLOR)
        .map(|(_, a)| *a);
    match colour {
        Some(Allele::Dominant) => "gold",
        Some(Allele::Recessive) => "olivedrab",
        None => "grey",
    }
}

/// One labelled bar per category, scaled so the largest count is [`CHART_HEIGHT`] tall.
pub fn draw_bars<K, F>(counts: &[(K, usize)], offset: (usize, usize), fill: F) -> Group
where
    K: Display,
    F: Fn(&K) -> &'static str,
{
    let max = counts.iter().map(|(_, c)| *c).max().unwrap_or(0).max(1);
    counts
        .iter()
        .enumerate()
        .map(|(i, (k, c))| {
            let x = offset.0 + i * 3 * BLOCKSIZE;
            let h = c * CHART_HEIGHT / max;
            Group::new()
                .add(
                    Rectangle::new()
                        .set("width", 2 * BLOCKSIZE)
                        .set("height", h)
                        .set("x", x)
                        .set("y", offset.1 + CHART_HEIGHT - h)
                        .set("stroke", "black")
                        .set("fill", fill(k)),
                )
                .add(
                    Text::new(c.to_string())
                        .set("x", x)
                        .set("y", offset.1 + CHART_HEIGHT - h - 2)
                        .set("font-size", 6),
                )
                .add(
                    Text::new(k.to_string())
                        .set("x", x)
                        .set("y", offset.1 + CHART_HEIGHT + BLOCKSIZE)
                        .set("font-size", 4),
                )
        })
        .fold(Group::new(), |g, bar| g.add(bar))
}

impl Draw for Snapshot {
    fn view_box_size(&self) -> Option<(usize, usize)> {
        let n = self
            .genotype_counts()
            .len()
            .max(self.phenotype_counts().len());
        Some((n * 3 * BLOCKSIZE + BLOCKSIZE, 2 * (CHART_HEIGHT + 3 * BLOCKSIZE)))
    }

    fn draw(&self) -> Group {
        Group::new()
            .add(draw_bars(
                self.phenotype_counts(),
                (BLOCKSIZE, BLOCKSIZE),
                seed_colour,
            ))
            .add(draw_bars(
                self.genotype_counts(),
                (BLOCKSIZE, CHART_HEIGHT + 4 * BLOCKSIZE),
                |_| "steelblue",
            ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accumulator::Accumulator;
    use crate::pollination::{simulate_batch, RandomSource};
    use rand::prelude::*;

    #[test]
    fn snapshot_chart_test() {
        let mut acc = Accumulator::new();
        let mut source = RandomSource::new(StdRng::seed_from_u64(1));
        simulate_batch(&mut acc, 50, &mut source).unwrap();
        let s = acc.snapshot().document().to_string();

        assert_eq!(s.matches("<rect").count(), 13);
        assert!(s.contains("round yellow"));
        assert!(s.contains("wrinkled green"));
        assert!(s.contains("RrYy"));
        assert!(s.contains("gold"));
        assert!(s.contains("olivedrab"));
    }

    #[test]
    fn empty_chart_test() {
        let s = Accumulator::new().snapshot().document().to_string();
        assert_eq!(s.matches("<rect").count(), 13);
        assert!(s.contains("viewBox"));
    }
}
