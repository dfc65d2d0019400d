/// a canonical set of tags describing one decision point. tags are
/// kept sorted and deduplicated so that two situations described in a
/// different order still land on the same tree node.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tags(Vec<Tag>);

impl Tags {
    /// at most one move tag ever appears in a set
    pub fn move_tag(&self) -> Option<Tag> {
        self.0.iter().copied().find(Tag::is_move)
    }

    pub fn contains(&self, tag: &Tag) -> bool {
        self.0.contains(tag)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tag> {
        self.0.iter()
    }
}

impl From<Vec<Tag>> for Tags {
    fn from(mut tags: Vec<Tag>) -> Self {
        tags.sort();
        tags.dedup();
        Self(tags)
    }
}

impl std::fmt::Display for Tags {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, tag) in self.0.iter().enumerate() {
            match i {
                0 => write!(f, "{}", tag)?,
                _ => write!(f, ", {}", tag)?,
            }
        }
        write!(f, "}}")
    }
}

impl std::str::FromStr for Tags {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s
            .strip_prefix('{')
            .and_then(|s| s.strip_suffix('}'))
            .with_context(|| format!("tags must be braced: {}", s))?;
        match body.is_empty() {
            true => Ok(Self::default()),
            false => body
                .split(", ")
                .map(str::parse::<Tag>)
                .collect::<Result<Vec<Tag>, _>>()
                .map(Self::from),
        }
    }
}

use super::tag::Tag;
use anyhow::Context;
