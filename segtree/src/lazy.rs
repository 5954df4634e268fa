use std::iter;

use super::{
    check_index,
    operation::{Descend, Operator, OrderStatistic},
    Segtree, SegtreeError,
};

/// 区間代入と区間質問のセグメント木。
///
/// 保留中の代入は頂点ごとに`lazy`へ持ち、その部分木へ降りる必要が
/// 生じるまで子には流さない。`lazy[i]`が`Some`の間も`data[i]`は
/// 代入を織り込んだ集約値を保つので、頂点単体の読み出しに伝播は
/// 要らない。
///
/// 代入の意味論であって加算ではない。区間`[l, r]`への`update`は
/// その区間のすべての要素を同じ値に置き換える。
#[derive(Debug, Clone)]
pub struct LazySegtree<T, OP> {
    len: usize,
    data: Box<[T]>,
    lazy: Box<[Option<T>]>,
    op: OP,
}

impl<T, OP> LazySegtree<T, OP> {
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<T: Clone, OP: Operator<Query = T>> LazySegtree<T, OP> {
    /// すべての位置が単位元の木を作る。
    pub fn with_len(len: usize, op: OP) -> Result<Self, SegtreeError> {
        Ok(Self::from_segtree(Segtree::with_len(len, op)?))
    }

    /// 列のスナップショットから木を作る。元の列を後から書き換えても
    /// 木には影響しない。
    pub fn from_slice(values: &[T], op: OP) -> Result<Self, SegtreeError> {
        Ok(Self::from_segtree(Segtree::from_slice(values, op)?))
    }

    pub fn from_segtree(segtree: Segtree<T, OP>) -> Self {
        let Segtree { len, data, op } = segtree;
        let lazy = iter::repeat_with(|| None).take(data.len()).collect();
        Self {
            len,
            data,
            lazy,
            op,
        }
    }

    /// 頂点`i`の保留中の代入を解決する。自身の集約値を確定させ、
    /// 葉でなければ子の保留値を丸ごと置き換える。
    fn propagate(&mut self, i: usize, seg_l: usize, seg_r: usize) {
        let Some(value) = self.lazy[i].take() else {
            return;
        };
        self.data[i] = self.op.fill_aggregate(&value, seg_r - seg_l + 1);
        if seg_l != seg_r {
            self.lazy[2 * i] = Some(value.clone());
            self.lazy[2 * i + 1] = Some(value);
        }
    }

    /// 閉区間`[l, r]`の集約値を返す。`l > r`のときは単位元を返す。
    ///
    /// 論理的には読み出しだが、通り道の保留値を解決するため内部配列は
    /// 書き換わる。
    pub fn query(&mut self, l: usize, r: usize) -> Result<T, SegtreeError> {
        check_index(l, self.len)?;
        check_index(r, self.len)?;
        Ok(self.query_node(1, 0, self.len - 1, l, r))
    }

    fn query_node(&mut self, i: usize, seg_l: usize, seg_r: usize, l: usize, r: usize) -> T {
        if l > r {
            return OP::IDENT;
        }
        self.propagate(i, seg_l, seg_r);
        if l <= seg_l && seg_r <= r {
            return self.data[i].clone();
        }
        let mid = seg_l + (seg_r - seg_l) / 2;
        let left = self.query_node(2 * i, seg_l, mid, l, r.min(mid));
        let right = self.query_node(2 * i + 1, mid + 1, seg_r, l.max(mid + 1), r);
        self.op.op(&left, &right)
    }

    /// 閉区間`[l, r]`のすべての要素を`value`に置き換える。
    ///
    /// 区間が頂点を丸ごと覆うところで代入を保留にして引き返す。その
    /// 部分木へは、次にそこへ降りる質問か更新が来たときに流れる。
    pub fn update(&mut self, l: usize, r: usize, value: T) -> Result<(), SegtreeError> {
        check_index(l, self.len)?;
        check_index(r, self.len)?;
        if l > r {
            return Err(SegtreeError::InvertedRange { start: l, end: r });
        }
        self.update_node(1, 0, self.len - 1, l, r, &value);
        Ok(())
    }

    fn update_node(&mut self, i: usize, seg_l: usize, seg_r: usize, l: usize, r: usize, value: &T) {
        self.propagate(i, seg_l, seg_r);
        if r < seg_l || seg_r < l {
            return;
        }
        if l <= seg_l && seg_r <= r {
            self.lazy[i] = Some(value.clone());
            self.propagate(i, seg_l, seg_r);
            return;
        }
        let mid = seg_l + (seg_r - seg_l) / 2;
        self.update_node(2 * i, seg_l, mid, l, r, value);
        self.update_node(2 * i + 1, mid + 1, seg_r, l, r, value);
        self.data[i] = self.op.op(&self.data[2 * i], &self.data[2 * i + 1]);
    }

    /// 保留中の代入をすべて解決した現在の列をO(n)で取り出す。
    pub fn to_vec(&mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len);
        self.collect_leaves(1, 0, self.len - 1, &mut out);
        out
    }

    fn collect_leaves(&mut self, i: usize, seg_l: usize, seg_r: usize, out: &mut Vec<T>) {
        self.propagate(i, seg_l, seg_r);
        if seg_l == seg_r {
            out.push(self.data[i].clone());
            return;
        }
        let mid = seg_l + (seg_r - seg_l) / 2;
        self.collect_leaves(2 * i, seg_l, mid, out);
        self.collect_leaves(2 * i + 1, mid + 1, seg_r, out);
    }
}

impl<T: Clone, OP: OrderStatistic<Query = T>> LazySegtree<T, OP> {
    /// 先頭からの累積重みが初めて`k`以上になる位置を返す。
    /// `k`が非正か、重みの総和が`k`に満たない場合は`None`。
    pub fn kth_element(&mut self, k: T) -> Option<usize> {
        if !self.op.admissible(&k) {
            return None;
        }
        self.propagate(1, 0, self.len - 1);
        if let Descend::Right(_) = self.op.descend(k.clone(), &self.data[1]) {
            return None;
        }
        let mut k = k;
        let mut i = 1;
        let (mut l, mut r) = (0, self.len - 1);
        while l < r {
            let mid = l + (r - l) / 2;
            self.propagate(2 * i, l, mid);
            self.propagate(2 * i + 1, mid + 1, r);
            match self.op.descend(k, &self.data[2 * i]) {
                Descend::Left(rest) => {
                    k = rest;
                    i *= 2;
                    r = mid;
                }
                Descend::Right(rest) => {
                    k = rest;
                    i = 2 * i + 1;
                    l = mid + 1;
                }
            }
        }
        Some(l)
    }
}
