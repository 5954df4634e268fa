use std::{cmp::Ordering, collections::HashMap, hash::Hash, mem};

/// ランクによる併合と経路圧縮つきの素集合データ構造。
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u32>,
    size: Vec<usize>,
    components: usize,
}

impl UnionFind {
    /// `len`個の1要素集合から始める。
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
            size: vec![1; len],
            components: len,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// 現在の連結成分の個数。
    pub fn components(&self) -> usize {
        self.components
    }

    /// 新しい1要素集合を末尾に足し、その添字を返す。
    pub fn push(&mut self) -> usize {
        let index = self.parent.len();
        self.parent.push(index);
        self.rank.push(0);
        self.size.push(1);
        self.components += 1;
        index
    }

    /// `i`の属する集合の代表元。根を見つけたあと、通った頂点を
    /// すべて根へ付け替える。
    pub fn find(&mut self, mut i: usize) -> usize {
        let mut root = i;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        while self.parent[i] != root {
            let next = self.parent[i];
            self.parent[i] = root;
            i = next;
        }
        root
    }

    pub fn connected(&mut self, i: usize, j: usize) -> bool {
        self.find(i) == self.find(j)
    }

    /// `i`と`j`の集合を併合する。すでに同じ集合なら`false`。
    pub fn unite(&mut self, i: usize, j: usize) -> bool {
        let root_i = self.find(i);
        let root_j = self.find(j);
        if root_i == root_j {
            return false;
        }
        self.components -= 1;
        let (upper, lower) = match self.rank[root_i].cmp(&self.rank[root_j]) {
            Ordering::Less => (root_j, root_i),
            Ordering::Greater => (root_i, root_j),
            Ordering::Equal => {
                self.rank[root_i] += 1;
                (root_i, root_j)
            }
        };
        self.parent[lower] = upper;
        self.size[upper] += mem::take(&mut self.size[lower]);
        true
    }

    /// `i`の属する集合の要素数。
    pub fn size(&mut self, i: usize) -> usize {
        let root = self.find(i);
        self.size[root]
    }
}

/// 任意のキーで引ける素集合データ構造。初出のキーは触れた時点で
/// 1要素集合になる。
#[derive(Debug, Clone)]
pub struct HashedUnionFind<K> {
    ids: HashMap<K, usize>,
    inner: UnionFind,
}

impl<K> Default for HashedUnionFind<K> {
    fn default() -> Self {
        Self {
            ids: HashMap::new(),
            inner: UnionFind::new(0),
        }
    }
}

impl<K: Eq + Hash + Clone> HashedUnionFind<K> {
    pub fn new() -> Self {
        Self {
            ids: HashMap::new(),
            inner: UnionFind::new(0),
        }
    }

    /// これまでに触れたキーの個数。
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn components(&self) -> usize {
        self.inner.components()
    }

    fn id_of(&mut self, key: &K) -> usize {
        if let Some(&id) = self.ids.get(key) {
            id
        } else {
            let id = self.inner.push();
            self.ids.insert(key.clone(), id);
            id
        }
    }

    pub fn connected(&mut self, a: &K, b: &K) -> bool {
        let a = self.id_of(a);
        let b = self.id_of(b);
        self.inner.connected(a, b)
    }

    pub fn unite(&mut self, a: &K, b: &K) -> bool {
        let a = self.id_of(a);
        let b = self.id_of(b);
        self.inner.unite(a, b)
    }

    pub fn size(&mut self, key: &K) -> usize {
        let id = self.id_of(key);
        self.inner.size(id)
    }
}
