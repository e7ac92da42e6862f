use parking_lot::RwLock;
use viaggio_shared::post::{Folder, GeoPoint, Post};

/// Sort orders for the displayed post list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Most recent first.
    Date,
    /// Closest to the active proximity center first.
    Distance,
    /// Most expensive first.
    Expense,
}

/// Top-level grouping of the post list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    All,
    Favorites,
    CurrentYear,
    Folder(u64),
}

impl Default for Section {
    fn default() -> Self {
        Self::All
    }
}

/// Keeps posts within `radius_km` of `center`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceFilter {
    pub center: GeoPoint,
    pub radius_km: f64,
}

impl DistanceFilter {
    /// Whether the filter should be applied at all: the center and the
    /// radius must all be finite numbers.
    pub fn is_valid(&self) -> bool {
        self.center.is_valid() && self.radius_km.is_finite()
    }
}

/// The filter and sort criteria selected by the user.
///
/// Every field defaults to "inactive", which places no restriction on
/// the displayed list.
#[derive(Debug, Clone, Default)]
pub struct Criteria {
    pub search_text: String,
    pub mood: Option<String>,
    pub tags: Vec<String>,
    pub distance: Option<DistanceFilter>,
    pub sort: Option<SortKey>,
    pub section: Section,
}

/// Owns the in-memory post collection and the active criteria for the
/// lifetime of the session.
///
/// All mutation goes through the named operations below; the displayed
/// list is derived on demand with [`PostStore::filtered_posts`].
#[derive(Default)]
pub struct PostStore {
    posts: RwLock<Vec<Post>>,
    folders: RwLock<Vec<Folder>>,
    criteria: RwLock<Criteria>,
}

impl PostStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole collection, e.g. after a refresh from the
    /// server.
    pub fn replace_all(&self, posts: Vec<Post>) {
        *self.posts.write() = posts;
    }

    /// A snapshot of the raw, unfiltered collection.
    pub fn posts(&self) -> Vec<Post> {
        self.posts.read().clone()
    }

    /// Indicates if the target id is already contained in this instance.
    pub fn contains_id(&self, id: u64) -> bool {
        self.posts.read().iter().any(|p| p.id == id)
    }

    pub fn get(&self, id: u64) -> Option<Post> {
        self.posts.read().iter().find(|p| p.id == id).cloned()
    }

    /// Patches a single post in place by id lookup. Unknown ids are
    /// ignored.
    pub fn replace(&self, post: Post) {
        if let Some(p) = self.posts.write().iter_mut().find(|p| p.id == post.id) {
            *p = post;
        }
    }

    /// Removes a post by id, keeping the rest untouched.
    pub fn remove(&self, id: u64) {
        self.posts.write().retain(|p| p.id != id);
    }

    pub fn set_folders(&self, folders: Vec<Folder>) {
        *self.folders.write() = folders;
    }

    pub fn set_search_text(&self, text: impl Into<String>) {
        self.criteria.write().search_text = text.into();
    }

    pub fn set_mood_filter(&self, mood: Option<String>) {
        self.criteria.write().mood = mood;
    }

    pub fn set_tags_filter(&self, tags: Vec<String>) {
        self.criteria.write().tags = tags;
    }

    pub fn set_distance_filter(&self, filter: Option<DistanceFilter>) {
        self.criteria.write().distance = filter;
    }

    pub fn set_sort_key(&self, sort: Option<SortKey>) {
        self.criteria.write().sort = sort;
    }

    pub fn set_section(&self, section: Section) {
        self.criteria.write().section = section;
    }

    /// A snapshot of the active criteria.
    pub fn criteria(&self) -> Criteria {
        self.criteria.read().clone()
    }

    /// The ordered list to display, derived from the collection and the
    /// active criteria.
    pub fn filtered_posts(&self) -> Vec<Post> {
        crate::query::filtered_posts(&self.posts.read(), &self.criteria.read())
    }

    /// Display name of the active section.
    pub fn section_name(&self) -> String {
        match self.criteria.read().section {
            Section::All => "All files".to_string(),
            Section::Favorites => "Favorites".to_string(),
            Section::CurrentYear => "Current year".to_string(),
            Section::Folder(id) => self
                .folders
                .read()
                .iter()
                .find(|f| f.id == id)
                .map(|f| f.name.clone())
                .unwrap_or_default(),
        }
    }
}
