use fenwick::{FenwickTree, RangeAddRangeSum};
use rand::{rngs::ThreadRng, Rng};

#[derive(Debug, Clone, Copy)]
enum Query {
    Sum(usize, usize),
    Add(usize, i64),
    Kth(i64),
}

fn point_add_solve_fenwick(data: &[i64], queries: &[Query]) -> Vec<i64> {
    let mut fenwick = FenwickTree::from_slice(data);
    let mut res = vec![];
    for &query in queries {
        match query {
            Query::Sum(l, r) => res.push(fenwick.sum(l..r)),
            Query::Add(i, x) => fenwick.add(i, x),
            Query::Kth(k) => res.push(fenwick.kth_element(k).map_or(-1, |i| i as i64)),
        }
    }
    res
}

fn point_add_solve_simple(data: &[i64], queries: &[Query]) -> Vec<i64> {
    let mut data = data.to_vec();
    let mut res = vec![];
    for &query in queries {
        match query {
            Query::Sum(l, r) => res.push(data[l..r].iter().sum()),
            Query::Add(i, x) => data[i] += x,
            Query::Kth(k) => {
                let total: i64 = data.iter().sum();
                if k <= 0 || k > total {
                    res.push(-1);
                } else {
                    let mut sum = 0;
                    for (i, &x) in data.iter().enumerate() {
                        sum += x;
                        if sum >= k {
                            res.push(i as i64);
                            break;
                        }
                    }
                }
            }
        }
    }
    res
}

fn point_add_test_once(rng: &mut ThreadRng) {
    let n = rng.gen_range(1..=500);
    // kth_elementの前提を満たすため重みは非負に保つ
    let data = (0..n).map(|_| rng.gen_range(0..=50)).collect::<Vec<_>>();
    let q = rng.gen_range(1..=500);
    let queries = (0..q)
        .map(|_| {
            if rng.gen_bool(0.25) {
                Query::Kth(rng.gen_range(-1..=n as i64 * 50 + 1))
            } else if rng.gen_bool(0.5) {
                let l = rng.gen_range(0..n);
                let r = rng.gen_range(l..=n);
                Query::Sum(l, r)
            } else {
                Query::Add(rng.gen_range(0..n), rng.gen_range(0..=50))
            }
        })
        .collect::<Vec<_>>();
    let expected = point_add_solve_simple(&data, &queries);
    let result = point_add_solve_fenwick(&data, &queries);
    assert_eq!(expected, result);
}

#[test]
fn point_add_test() {
    let mut rng = rand::thread_rng();
    for _ in 0..100 {
        point_add_test_once(&mut rng);
    }
}

#[derive(Debug, Clone, Copy)]
enum RangeQuery {
    Sum(usize, usize),
    Add(usize, usize, i64),
}

fn range_add_solve_fenwick(n: usize, queries: &[RangeQuery]) -> Vec<i64> {
    let mut tree = RangeAddRangeSum::with_len(n);
    let mut res = vec![];
    for &query in queries {
        match query {
            RangeQuery::Sum(l, r) => res.push(tree.sum(l..r)),
            RangeQuery::Add(l, r, x) => tree.add(l..r, x),
        }
    }
    res
}

fn range_add_solve_simple(n: usize, queries: &[RangeQuery]) -> Vec<i64> {
    let mut data = vec![0i64; n];
    let mut res = vec![];
    for &query in queries {
        match query {
            RangeQuery::Sum(l, r) => res.push(data[l..r].iter().sum()),
            RangeQuery::Add(l, r, x) => data[l..r].iter_mut().for_each(|y| *y += x),
        }
    }
    res
}

#[test]
fn range_add_range_sum_test() {
    let mut rng = rand::thread_rng();
    for _ in 0..100 {
        let n = rng.gen_range(1..=500);
        let q = rng.gen_range(1..=500);
        let queries = (0..q)
            .map(|_| {
                let l = rng.gen_range(0..n);
                let r = rng.gen_range(l..=n);
                if rng.gen_bool(0.5) {
                    RangeQuery::Sum(l, r)
                } else {
                    RangeQuery::Add(l, r, rng.gen_range(-1_000_000..=1_000_000))
                }
            })
            .collect::<Vec<_>>();
        let expected = range_add_solve_simple(n, &queries);
        let result = range_add_solve_fenwick(n, &queries);
        assert_eq!(expected, result);
    }
}
