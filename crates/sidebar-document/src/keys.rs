//! Well-known keys and paths of watch-next documents

/// Path holding the content identifier in every well-formed document
pub const CONTENT_ID: &[&str] = &["currentVideoEndpoint", "watchEndpoint", "videoId"];

/// Top-level container of both layouts
pub const CONTENTS: &str = "contents";

/// Desktop layout root under `contents`
pub const TWO_COLUMN_RESULTS: &str = "twoColumnWatchNextResults";

/// Single-column layout root under `contents`
pub const SINGLE_COLUMN_RESULTS: &str = "singleColumnWatchNextResults";

/// Desktop sidebar container
pub const SECONDARY_RESULTS: &str = "secondaryResults";

/// Desktop description fragment
pub const VIDEO_SECONDARY_INFO: &str = "videoSecondaryInfoRenderer";

/// Description field inside [`VIDEO_SECONDARY_INFO`]
pub const DESCRIPTION: &str = "description";

/// Single-column section wrapper
pub const ITEM_SECTION: &str = "itemSectionRenderer";

/// Field identifying a section's purpose
pub const TARGET_ID: &str = "targetId";

/// Target identifier of the "next content" feed section
pub const WATCH_NEXT_FEED: &str = "watch-next-feed";

/// Single-column engagement panel list
pub const ENGAGEMENT_PANELS: &str = "engagementPanels";

/// Engagement panel wrapper
pub const ENGAGEMENT_PANEL_SECTION: &str = "engagementPanelSectionListRenderer";

/// Structured description panel body
pub const STRUCTURED_DESCRIPTION: &str = "structuredDescriptionContentRenderer";

/// Expandable description fragment inside the structured description items
pub const EXPANDABLE_DESCRIPTION_BODY: &str = "expandableVideoDescriptionBodyRenderer";

/// Desktop `results.results.contents` list holding primary/secondary info
pub const TWO_COLUMN_PRIMARY_CONTENTS: &[&str] = &[
    CONTENTS,
    TWO_COLUMN_RESULTS,
    "results",
    "results",
    "contents",
];

/// Desktop sidebar container path
pub const TWO_COLUMN_SECONDARY_RESULTS: &[&str] = &[CONTENTS, TWO_COLUMN_RESULTS, SECONDARY_RESULTS];

/// Desktop sidebar result list; missing means the sidebar is empty
pub const TWO_COLUMN_SIDEBAR_RESULTS: &[&str] = &[
    CONTENTS,
    TWO_COLUMN_RESULTS,
    SECONDARY_RESULTS,
    SECONDARY_RESULTS,
    "results",
];

/// Single-column `results.results.contents` list
pub const SINGLE_COLUMN_CONTENTS: &[&str] = &[
    CONTENTS,
    SINGLE_COLUMN_RESULTS,
    "results",
    "results",
    "contents",
];

/// Path from an engagement panel entry to its structured description items
pub const STRUCTURED_DESCRIPTION_ITEMS: &[&str] = &[
    ENGAGEMENT_PANEL_SECTION,
    "content",
    STRUCTURED_DESCRIPTION,
    "items",
];
