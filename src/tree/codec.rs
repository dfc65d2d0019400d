/// flat text persistence for the game tree. every line is one
/// root-to-leaf path, nodes joined by '$', each node serialized as
/// `{tags};{confidence};{good};{total}`. shared prefixes repeat on
/// every line through them and re-apply the same stats on load, so
/// the format round-trips exactly.
impl GameTree {
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        for line in self.paths() {
            writeln!(file, "{}", line)?;
        }
        Ok(())
    }

    pub fn load(path: &Path) -> Result<GameTree> {
        let file =
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
        let mut tree = GameTree::root();
        for line in BufReader::new(file).lines() {
            let line = line?;
            if line.is_empty() {
                continue;
            }
            tree.absorb(&line)
                .with_context(|| format!("malformed line: {}", line))?;
        }
        Ok(tree)
    }

    /// every root-to-leaf path, in key order
    pub fn paths(&self) -> Vec<String> {
        match self.children().next() {
            None => vec![self.record()],
            Some(_) => self
                .children()
                .flat_map(|(_, child)| child.paths())
                .map(|path| format!("{}${}", self.record(), path))
                .collect(),
        }
    }

    fn record(&self) -> String {
        format!(
            "{};{};{};{}",
            self.classes().cloned().unwrap_or_default(),
            self.confidence().unwrap_or(0.0),
            self.good(),
            self.total()
        )
    }

    /// replay one serialized path into the tree, creating nodes as
    /// needed and overwriting stats on the ones already present
    pub fn absorb(&mut self, line: &str) -> Result<()> {
        let mut node: &mut GameTree = self;
        for (i, record) in line.split('$').enumerate() {
            let mut fields = record.split(';');
            let tags = fields.next().context("missing tags")?.parse::<Tags>()?;
            let _ = fields
                .next()
                .context("missing confidence")?
                .parse::<Probability>()
                .context("bad confidence")?;
            let good = fields
                .next()
                .context("missing good count")?
                .parse::<usize>()
                .context("bad good count")?;
            let total = fields
                .next()
                .context("missing total count")?
                .parse::<usize>()
                .context("bad total count")?;
            ensure!(fields.next().is_none(), "trailing fields");
            if i == 0 {
                ensure!(tags.is_empty(), "paths must start at the root");
            } else {
                node = node
                    .children_mut()
                    .entry(tags.clone())
                    .or_insert_with(|| GameTree::node(tags));
            }
            node.set_stats(good, total);
        }
        Ok(())
    }
}

use super::tags::Tags;
use super::tree::GameTree;
use crate::Probability;
use anyhow::{ensure, Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
