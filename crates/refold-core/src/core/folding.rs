use super::models::sequence::NucleotideSequence;
use super::models::structure::TargetStructure;
use phf::phf_map;

/// Admissible pairing partners per base, Watson-Crick partner first, then wobble.
/// `t` is the DNA-alphabet synonym for `u`; the wildcard pairs with nothing.
static PARTNERS: phf::Map<char, &'static str> = phf_map! {
    'a' => "ut",
    'c' => "g",
    'g' => "cut",
    'u' => "ag",
    't' => "ag",
};

/// Minimum number of unpaired bases enclosed by a hairpin-closing pair.
pub const MIN_HAIRPIN: usize = 3;

pub fn can_pair(a: char, b: char) -> bool {
    PARTNERS.get(&a).is_some_and(|partners| partners.contains(b))
}

/// Partners `base` may pair with, preferring Watson-Crick, or `None` for the
/// wildcard. The returned slice never proposes `t`, so filling positions from it
/// keeps designs in the RNA alphabet.
pub fn rna_partners(base: char) -> Option<&'static str> {
    match base {
        'a' | 't' => Some("u"),
        'c' => Some("g"),
        'g' => Some("cu"),
        'u' => Some("ag"),
        _ => None,
    }
}

/// Predicts a secondary structure by maximizing the base-pair count (Nussinov).
///
/// O(n³) dynamic program over AU/GC/GU pairs with a minimum hairpin loop of
/// [`MIN_HAIRPIN`] bases. Wildcard positions never pair. Deterministic: ties are
/// broken in a fixed case order during traceback.
pub fn nussinov_fold(sequence: &NucleotideSequence) -> TargetStructure {
    let symbols: Vec<char> = sequence.symbols().collect();
    let n = symbols.len();
    let idx = |i: usize, j: usize| i * n + j;

    let mut table = vec![0u32; n * n];
    for len in 2..=n {
        for i in 0..=n - len {
            let j = i + len - 1;
            let mut best = table[idx(i + 1, j)].max(table[idx(i, j - 1)]);
            if j - i > MIN_HAIRPIN && can_pair(symbols[i], symbols[j]) {
                best = best.max(table[idx(i + 1, j - 1)] + 1);
            }
            for split in i + 1..j {
                best = best.max(table[idx(i, split)] + table[idx(split + 1, j)]);
            }
            table[idx(i, j)] = best;
        }
    }

    let mut pairs = vec![None; n];
    let mut intervals = vec![(0usize, n - 1)];
    while let Some((i, j)) = intervals.pop() {
        if i >= j {
            continue;
        }
        let score = table[idx(i, j)];
        if table[idx(i + 1, j)] == score {
            intervals.push((i + 1, j));
            continue;
        }
        if j - i > MIN_HAIRPIN
            && can_pair(symbols[i], symbols[j])
            && table[idx(i + 1, j - 1)] + 1 == score
        {
            pairs[i] = Some(j);
            pairs[j] = Some(i);
            intervals.push((i + 1, j - 1));
            continue;
        }
        let split = (i + 1..j).find(|&s| table[idx(i, s)] + table[idx(s + 1, j)] == score);
        if let Some(split) = split {
            intervals.push((i, split));
            intervals.push((split + 1, j));
        } else {
            intervals.push((i, j - 1));
        }
    }

    TargetStructure::from_pair_table(pairs)
}
