//! Configuration nodes and scoped sub-views.
//!
//! A [`ConfigNode`] owns a private [`Mapping`] and may be linked to the node
//! it was split from. Writes made through a child are replayed on every
//! ancestor with the path prefixed by each hop's mount path, so ancestors
//! always see what their children wrote.

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::provider::ConfigProvider;
use crate::error::Result;
use crate::path::{PathResolver, Query};
use crate::value::{Mapping, Value};

#[derive(Debug, Default)]
struct NodeState {
    items: Mapping,
    parent: Option<ParentLink>,
}

/// Owning link from a child to the node it was split from.
///
/// Parents never reference their children, so the chain is acyclic.
#[derive(Debug)]
struct ParentLink {
    node: Rc<RefCell<NodeState>>,
    mount: Query,
}

/// A node in a configuration tree.
///
/// `ConfigNode` is a handle: cloning it yields another handle to the same
/// node. Children created by [`split`](Self::split) hold a strong link to
/// their parent, so every ancestor of a live node stays alive and receives
/// its writes. Nodes are neither `Send` nor `Sync`; callers sharing a tree
/// across threads must put the whole tree behind their own lock.
///
/// Malformed queries (empty, or with an empty segment) are rejected by every
/// operation with [`Error::MalformedQuery`](crate::Error::MalformedQuery).
/// Absent paths are never an error.
///
/// # Examples
///
/// ```
/// use cfgtree::{ConfigNode, Value};
///
/// let root = ConfigNode::new();
/// root.set("database.connections.default.host", "db.local").unwrap();
///
/// let db = root.split("database.connections").unwrap();
/// assert_eq!(db.get("default.host").unwrap(), Some(Value::from("db.local")));
///
/// db.set("default.port", 5432).unwrap();
/// assert_eq!(
///     root.get("database.connections.default.port").unwrap(),
///     Some(Value::from(5432))
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigNode {
    inner: Rc<RefCell<NodeState>>,
}

impl ConfigNode {
    /// Creates an empty root node.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a root node that owns `items` as-is.
    ///
    /// Unlike [`create`](Self::create), keys are not interpreted as paths.
    #[must_use]
    pub fn from_mapping(items: Mapping) -> Self {
        Self {
            inner: Rc::new(RefCell::new(NodeState {
                items,
                parent: None,
            })),
        }
    }

    /// Creates a root node by calling [`set`](Self::set) for every pair.
    ///
    /// Keys go through path resolution, so `"db.host"` lands at `host`
    /// inside `db` rather than under a literal `"db.host"` key.
    ///
    /// # Errors
    ///
    /// Returns an error if any key is a malformed query.
    ///
    /// # Examples
    ///
    /// ```
    /// use cfgtree::{ConfigNode, Value};
    ///
    /// let node = ConfigNode::create([
    ///     ("app.name", Value::from("demo")),
    ///     ("debug", Value::from(true)),
    /// ])
    /// .unwrap();
    /// assert_eq!(node.get("app.name").unwrap(), Some(Value::from("demo")));
    /// assert!(node.has("debug").unwrap());
    /// ```
    pub fn create<I, K, V>(literal: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        let node = Self::new();
        for (key, value) in literal {
            node.set(key.as_ref(), value)?;
        }
        Ok(node)
    }

    /// Returns a copy of the value at `query`, or `None` if it is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if `query` is malformed.
    pub fn get(&self, query: &str) -> Result<Option<Value>> {
        let query = Query::parse(query)?;
        let state = self.inner.borrow();
        Ok(PathResolver::fetch(&state.items, &query).cloned())
    }

    /// Returns a copy of the value at `query`, or `default` if it is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if `query` is malformed.
    pub fn get_or<V: Into<Value>>(&self, query: &str, default: V) -> Result<Value> {
        Ok(self.get(query)?.unwrap_or_else(|| default.into()))
    }

    /// Returns `true` if a value, possibly null, is stored at `query`.
    ///
    /// # Errors
    ///
    /// Returns an error if `query` is malformed.
    pub fn has(&self, query: &str) -> Result<bool> {
        let query = Query::parse(query)?;
        let state = self.inner.borrow();
        Ok(PathResolver::exists(&state.items, &query))
    }

    /// Stores `value` at `query` and replays the write on every ancestor.
    ///
    /// Intermediate containers are created as needed; a scalar standing where
    /// a mapping is required is replaced. Returns the written value.
    ///
    /// # Errors
    ///
    /// Returns an error if `query` is malformed. Nothing is written then.
    pub fn set<V: Into<Value>>(&self, query: &str, value: V) -> Result<Value> {
        let query = Query::parse(query)?;
        let value = value.into();
        self.forward(&query, |items, path| {
            PathResolver::extend(items, path, value.clone());
        });
        Ok(value)
    }

    /// Deep-merges `value` into `query` here and on every ancestor.
    ///
    /// # Errors
    ///
    /// Returns an error if `query` is malformed.
    pub fn merge<V: Into<Value>>(&self, query: &str, value: V) -> Result<()> {
        let query = Query::parse(query)?;
        let value = value.into();
        self.forward(&query, |items, path| {
            PathResolver::merge(items, path, value.clone());
        });
        Ok(())
    }

    /// Removes the value at `query` here and on every ancestor.
    ///
    /// Returns what this node held at `query`.
    ///
    /// # Errors
    ///
    /// Returns an error if `query` is malformed.
    pub fn remove(&self, query: &str) -> Result<Option<Value>> {
        let query = Query::parse(query)?;
        let mut removed = None;
        let mut own = true;
        self.forward(&query, |items, path| {
            let value = PathResolver::remove(items, path);
            if own {
                removed = value;
                own = false;
            }
        });
        Ok(removed)
    }

    /// Creates a child node mounted at `query`.
    ///
    /// If a mapping is already stored at `query`, the child starts from a
    /// deep copy of it; later writes to this node are not visible in the
    /// child. Anything else at `query` is not adopted and the child starts
    /// empty. Writes through the child are forwarded here.
    ///
    /// # Errors
    ///
    /// Returns an error if `query` is malformed.
    pub fn split(&self, query: &str) -> Result<ConfigNode> {
        let mount = Query::parse(query)?;
        let items = match PathResolver::fetch(&self.inner.borrow().items, &mount) {
            Some(Value::Mapping(existing)) => existing.clone(),
            Some(other) => {
                log::debug!(
                    "split at '{mount}' found a {}, child starts empty",
                    other.type_name()
                );
                Mapping::new()
            }
            None => Mapping::new(),
        };

        Ok(Self {
            inner: Rc::new(RefCell::new(NodeState {
                items,
                parent: Some(ParentLink {
                    node: Rc::clone(&self.inner),
                    mount,
                }),
            })),
        })
    }

    /// Stores each provider's payload at the provider's query.
    ///
    /// Providers are applied in order, so later providers win on overlap.
    ///
    /// # Errors
    ///
    /// Returns an error on the first provider whose query is malformed.
    /// Providers before it have already been applied.
    ///
    /// # Examples
    ///
    /// ```
    /// use cfgtree::{ConfigNode, StaticProvider, Value};
    ///
    /// let db = StaticProvider::new("db", Value::from_yaml_str("host: x").unwrap());
    /// let ttl = StaticProvider::new("cache.ttl", 60);
    ///
    /// let node = ConfigNode::new();
    /// node.register([&db, &ttl]).unwrap();
    /// assert_eq!(node.get("db.host").unwrap(), Some(Value::from("x")));
    /// assert_eq!(node.get("cache.ttl").unwrap(), Some(Value::from(60)));
    /// ```
    pub fn register<I>(&self, providers: I) -> Result<&Self>
    where
        I: IntoIterator,
        I::Item: ConfigProvider,
    {
        for provider in providers {
            log::debug!("registering provider at '{}'", provider.query());
            self.set(provider.query(), provider.configuration())?;
        }
        Ok(self)
    }

    /// Returns a deep copy of this node's items.
    #[must_use]
    pub fn items(&self) -> Mapping {
        self.inner.borrow().items.clone()
    }

    /// Returns a deep copy of this node's items as a mapping value.
    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::Mapping(self.items())
    }

    /// Returns `true` if this node holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().items.is_empty()
    }

    /// Returns the query this node was split at, `None` for roots.
    #[must_use]
    pub fn mount_path(&self) -> Option<Query> {
        self.inner
            .borrow()
            .parent
            .as_ref()
            .map(|link| link.mount.clone())
    }

    /// Returns `true` if this node was not created by a split.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.inner.borrow().parent.is_none()
    }

    /// Returns a handle to the parent node, `None` for roots.
    #[must_use]
    pub fn parent(&self) -> Option<ConfigNode> {
        self.inner.borrow().parent.as_ref().map(|link| Self {
            inner: Rc::clone(&link.node),
        })
    }

    /// Returns `true` if both handles refer to the same node.
    #[must_use]
    pub fn ptr_eq(&self, other: &ConfigNode) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Applies `apply` to this node, then to each ancestor in turn with
    /// the path prefixed by the mount path of the hop just taken.
    fn forward<F>(&self, query: &Query, mut apply: F)
    where
        F: FnMut(&mut Mapping, &Query),
    {
        let mut node = Rc::clone(&self.inner);
        let mut path = query.clone();
        loop {
            let mut state = node.borrow_mut();
            apply(&mut state.items, &path);
            let next = state.parent.as_ref().map(|link| {
                path = link.mount.join(&path);
                Rc::clone(&link.node)
            });
            drop(state);

            match next {
                Some(parent) => node = parent,
                None => return,
            }
        }
    }
}
