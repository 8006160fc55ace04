//! 相似度检测
//!
//! 提交入库时对提交说明文本做一次同作业范围内的相似度评分，
//! 结果以 0-100 存入提交记录，供教师批改时参考。
//! 检测策略通过 trait 注入，便于替换为外部检测服务。

use std::collections::HashSet;

/// 相似度检测策略
pub trait PlagiarismChecker: Send + Sync {
    /// 对候选文本打分，peers 为同一作业下其他学生的文本。
    /// 返回 0.0-100.0，越高越相似。
    fn score(&self, candidate: &str, peers: &[String]) -> f64;
}

/// 基于 3 词 shingle 的 Jaccard 相似度
///
/// 文本按空白切词并统一小写，连续 3 个词构成一个 shingle，
/// 取与所有 peer 的 Jaccard 系数最大值。
pub struct JaccardChecker {
    shingle_size: usize,
}

impl Default for JaccardChecker {
    fn default() -> Self {
        Self { shingle_size: 3 }
    }
}

impl JaccardChecker {
    pub fn new(shingle_size: usize) -> Self {
        Self {
            shingle_size: shingle_size.max(1),
        }
    }

    fn shingles(&self, text: &str) -> HashSet<String> {
        let words: Vec<String> = text
            .split_whitespace()
            .map(|w| w.to_lowercase())
            .collect();

        if words.len() < self.shingle_size {
            // 文本太短时退化为整体比较
            if words.is_empty() {
                return HashSet::new();
            }
            return HashSet::from([words.join(" ")]);
        }

        words
            .windows(self.shingle_size)
            .map(|w| w.join(" "))
            .collect()
    }

    fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
        if a.is_empty() && b.is_empty() {
            return 0.0;
        }
        let intersection = a.intersection(b).count();
        let union = a.len() + b.len() - intersection;
        if union == 0 {
            0.0
        } else {
            intersection as f64 / union as f64
        }
    }
}

impl PlagiarismChecker for JaccardChecker {
    fn score(&self, candidate: &str, peers: &[String]) -> f64 {
        let candidate_shingles = self.shingles(candidate);
        if candidate_shingles.is_empty() {
            return 0.0;
        }

        let best = peers
            .iter()
            .map(|peer| Self::jaccard(&candidate_shingles, &self.shingles(peer)))
            .fold(0.0_f64, f64::max);

        (best * 100.0).clamp(0.0, 100.0)
    }
}

/// 空实现，检测关闭时使用
pub struct NoopChecker;

impl PlagiarismChecker for NoopChecker {
    fn score(&self, _candidate: &str, _peers: &[String]) -> f64 {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_text_scores_100() {
        let checker = JaccardChecker::default();
        let text = "la dérivée de x carré est deux x sur tout intervalle";
        let score = checker.score(text, &[text.to_string()]);
        assert!((score - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_disjoint_text_scores_0() {
        let checker = JaccardChecker::default();
        let score = checker.score(
            "analyse des suites convergentes et limites",
            &["chimie organique les alcanes et alcools".to_string()],
        );
        assert!(score.abs() < 1e-9);
    }

    #[test]
    fn test_partial_overlap_between_bounds() {
        let checker = JaccardChecker::default();
        let score = checker.score(
            "la fonction est continue sur son domaine de définition",
            &["la fonction est continue mais pas dérivable en zéro".to_string()],
        );
        assert!(score > 0.0);
        assert!(score < 100.0);
    }

    #[test]
    fn test_picks_max_over_peers() {
        let checker = JaccardChecker::default();
        let candidate = "un deux trois quatre cinq";
        let peers = vec![
            "six sept huit neuf dix".to_string(),
            "un deux trois quatre cinq".to_string(),
        ];
        let score = checker.score(candidate, &peers);
        assert!((score - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_candidate_scores_0() {
        let checker = JaccardChecker::default();
        assert_eq!(checker.score("", &["quelque chose".to_string()]), 0.0);
        assert_eq!(checker.score("   ", &[]), 0.0);
    }

    #[test]
    fn test_case_insensitive() {
        let checker = JaccardChecker::default();
        let score = checker.score(
            "Théorème De Pythagore Appliqué",
            &["théorème de pythagore appliqué".to_string()],
        );
        assert!((score - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_noop_checker_always_zero() {
        let checker = NoopChecker;
        assert_eq!(checker.score("texte", &["texte".to_string()]), 0.0);
    }
}
