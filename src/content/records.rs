use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// Binds a record type to the CMS collection it is stored in.
///
/// Records are read-only on this side: they are created and updated in the
/// CMS, fetched here, and discarded when the page goes away.
pub trait Collection: DeserializeOwned + Send + Sync + 'static {
    /// Collection id as known to the CMS.
    const ID: &'static str;
}

/// A product feature card, from the `appfeatures` collection.
///
/// Every display field is optional; only the id is guaranteed. Views must
/// skip absent fields rather than render empty strings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "featureName", default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "featureImage", default)]
    pub image: Option<String>,
    #[serde(default)]
    pub benefit: Option<String>,
    #[serde(rename = "shortDescription", default)]
    pub short_description: Option<String>,
    #[serde(rename = "learnMoreUrl", default)]
    pub learn_more_url: Option<String>,
}

impl Collection for Feature {
    const ID: &'static str = "appfeatures";
}

/// A health resource article, from the `healthresources` collection.
///
/// `content` holds the markdown article body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Article {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "articleTitle", default)]
    pub title: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(rename = "coverImage", default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl Collection for Article {
    const ID: &'static str = "healthresources";
}
