//! Channel lookup: resolve the name, fetch statistics, then fetch the most
//! viewed video, and merge everything into one [`ChannelInfo`].

use tracing::{debug, info};

use super::{ChannelInfo, Lookup, VideoPlatform};

/// Looks up a channel by name.
///
/// The steps run strictly one after the other since each needs the channel
/// id from the first. A failed resolution or statistics fetch makes the whole
/// lookup `NotFound` and no further requests are sent. A missing most popular
/// video only leaves [`ChannelInfo::most_popular_video`] empty.
pub async fn get_channel_info<P>(platform: &P, channel_name: &str) -> Lookup<ChannelInfo>
where
    P: VideoPlatform + ?Sized,
{
    let Lookup::Found(id) = platform.resolve_channel(channel_name).await else {
        info!("Channel '{}' could not be resolved", channel_name);
        return Lookup::NotFound;
    };

    let Lookup::Found(statistics) = platform.fetch_statistics(&id).await else {
        info!("No statistics for channel '{}' ({})", channel_name, id);
        return Lookup::NotFound;
    };

    let most_popular_video = platform.fetch_most_popular(&id).await;
    if !most_popular_video.is_found() {
        debug!("Channel {} has no most popular video", id);
    }

    Lookup::Found(ChannelInfo::merge(
        statistics,
        most_popular_video.into_option(),
    ))
}
