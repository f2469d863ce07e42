use crate::error::{LiveTvError, LiveTvErrorKind};
use crate::handle_livetv_error_result_list;
use crate::model::Channel;
use crate::utils::{is_hls_url, HLS_EXT};
use indexmap::{IndexMap, IndexSet};
use std::collections::HashSet;
use log::warn;

const BUILTIN_CATALOG: &str = include_str!("../../resources/channels.json");

/// Channels of one category, in catalog order.
#[derive(Debug, Clone, serde::Serialize, PartialEq)]
pub struct ChannelGroup<'a> {
    pub category: &'a str,
    pub channels: Vec<&'a Channel>,
}

/// The static, insertion ordered channel list.
///
/// A catalog is validated once when it is created and never changes afterwards.
/// Names are expected to be unique; when they are not, lookups return the first match.
#[derive(Debug, Clone, Default, serde::Serialize, PartialEq)]
#[serde(transparent)]
pub struct ChannelCatalog {
    channels: Vec<Channel>,
}

impl ChannelCatalog {
    pub fn new(mut channels: Vec<Channel>) -> Result<Self, LiveTvError> {
        channels.iter_mut().for_each(Channel::prepare);
        handle_livetv_error_result_list!(LiveTvErrorKind::Catalog,
            channels.iter().enumerate().map(|(idx, channel)| channel.validate(idx)));
        let catalog = Self { channels };
        for name in catalog.duplicate_names() {
            warn!("Channel name '{name}' is used more than once, only the first entry is reachable");
        }
        for channel in catalog.channels.iter().filter(|c| !is_hls_url(&c.url)) {
            warn!("Channel '{}' does not point to a {HLS_EXT} playlist: {}", channel.name, channel.url);
        }
        Ok(catalog)
    }

    /// The channel list compiled into the binary.
    pub fn builtin() -> Result<Self, LiveTvError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn from_json(content: &str) -> Result<Self, LiveTvError> {
        let channels: Vec<Channel> = serde_json::from_str(content)
            .map_err(|err| LiveTvError::new(LiveTvErrorKind::Catalog, format!("Failed to parse channel catalog: {err}")))?;
        Self::new(channels)
    }

    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Case-insensitive exact match on the channel name, the identifier is not trimmed.
    pub fn find(&self, name: &str) -> Option<&Channel> {
        if name.is_empty() {
            return None;
        }
        self.channels.iter().find(|channel| channel.has_name(name))
    }

    /// Like [`find`](Self::find) but with a not found error.
    pub fn get(&self, name: &str) -> Result<&Channel, LiveTvError> {
        self.find(name).ok_or_else(|| LiveTvError::new(LiveTvErrorKind::NotFound, format!("Channel not found: {name}")))
    }

    /// Distinct categories in order of first appearance.
    pub fn categories(&self) -> Vec<&str> {
        self.channels.iter()
            .map(|channel| channel.category.as_str())
            .collect::<IndexSet<&str>>()
            .into_iter()
            .collect()
    }

    pub fn group_by_category(&self) -> Vec<ChannelGroup<'_>> {
        let mut groups: IndexMap<&str, Vec<&Channel>> = IndexMap::new();
        for channel in &self.channels {
            groups.entry(channel.category.as_str()).or_default().push(channel);
        }
        groups.into_iter()
            .map(|(category, channels)| ChannelGroup { category, channels })
            .collect()
    }

    pub fn channels_in(&self, category: &str) -> Vec<&Channel> {
        self.channels.iter().filter(|channel| channel.is_in_category(category)).collect()
    }

    pub fn duplicate_names(&self) -> Vec<&str> {
        let mut seen: HashSet<String> = HashSet::with_capacity(self.channels.len());
        let mut duplicates = Vec::new();
        for channel in &self.channels {
            if !seen.insert(channel.name.to_lowercase()) {
                duplicates.push(channel.name.as_str());
            }
        }
        duplicates
    }
}
