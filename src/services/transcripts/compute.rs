use std::collections::HashMap;

use crate::models::subjects::entities::Subject;
use crate::models::transcripts::responses::{TranscriptResponse, TranscriptRow};

/// 由已评分成绩聚合成绩单。
///
/// `entries` 是 (科目 ID, 成绩) 列表，每个学生每科目至多一条当前成绩。
/// 没有任何已评分提交的科目不出现在行中，也不计入全局加权分母。
pub fn compute_transcript(subjects: &[Subject], entries: &[(i64, f64)]) -> TranscriptResponse {
    let mut grades_by_subject: HashMap<i64, Vec<f64>> = HashMap::new();
    for (subject_id, grade) in entries {
        grades_by_subject.entry(*subject_id).or_default().push(*grade);
    }

    let mut rows: Vec<TranscriptRow> = subjects
        .iter()
        .filter_map(|subject| {
            let grades = grades_by_subject.get(&subject.id)?;
            if grades.is_empty() {
                return None;
            }
            let average = grades.iter().sum::<f64>() / grades.len() as f64;
            Some(TranscriptRow {
                subject_id: subject.id,
                subject_name: subject.name.clone(),
                subject_code: subject.code.clone(),
                coefficient: subject.coefficient,
                average,
                grades_count: grades.len() as i64,
            })
        })
        .collect();
    rows.sort_by(|a, b| a.subject_code.cmp(&b.subject_code));

    let weight_sum: f64 = rows.iter().map(|r| r.coefficient).sum();
    let global_average = if weight_sum > 0.0 {
        let weighted: f64 = rows.iter().map(|r| r.average * r.coefficient).sum();
        Some(weighted / weight_sum)
    } else {
        None
    };

    TranscriptResponse {
        rows,
        global_average,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn subject(id: i64, code: &str, name: &str, coefficient: f64) -> Subject {
        Subject {
            id,
            name: name.into(),
            code: code.into(),
            coefficient,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_weighted_global_average() {
        let subjects = vec![
            subject(1, "MATH", "Mathématiques", 3.0),
            subject(2, "ENG", "Anglais", 2.0),
        ];
        // maths 平均 14，英语平均 13 → (14*3 + 13*2) / 5 = 13.6
        let entries = vec![(1, 14.0), (2, 12.0), (2, 14.0)];
        let transcript = compute_transcript(&subjects, &entries);

        assert_eq!(transcript.rows.len(), 2);
        let math = transcript
            .rows
            .iter()
            .find(|r| r.subject_code == "MATH")
            .unwrap();
        assert_eq!(math.average, 14.0);
        assert_eq!(math.grades_count, 1);
        assert!((transcript.global_average.unwrap() - 13.6).abs() < 1e-9);
    }

    #[test]
    fn test_ungraded_subject_excluded_from_rows_and_denominator() {
        let subjects = vec![
            subject(1, "MATH", "Mathématiques", 3.0),
            subject(2, "PHY", "Physique", 5.0), // 无成绩，不应拉低全局平均
        ];
        let entries = vec![(1, 16.0)];
        let transcript = compute_transcript(&subjects, &entries);

        assert_eq!(transcript.rows.len(), 1);
        assert_eq!(transcript.rows[0].subject_id, 1);
        assert_eq!(transcript.global_average, Some(16.0));
    }

    #[test]
    fn test_empty_transcript() {
        let subjects = vec![subject(1, "MATH", "Mathématiques", 3.0)];
        let transcript = compute_transcript(&subjects, &[]);
        assert!(transcript.rows.is_empty());
        assert_eq!(transcript.global_average, None);
    }

    #[test]
    fn test_rows_sorted_by_code() {
        let subjects = vec![
            subject(1, "PHY", "Physique", 1.0),
            subject(2, "ENG", "Anglais", 1.0),
            subject(3, "MATH", "Mathématiques", 1.0),
        ];
        let entries = vec![(1, 10.0), (2, 11.0), (3, 12.0)];
        let transcript = compute_transcript(&subjects, &entries);
        let codes: Vec<&str> = transcript
            .rows
            .iter()
            .map(|r| r.subject_code.as_str())
            .collect();
        assert_eq!(codes, vec!["ENG", "MATH", "PHY"]);
    }

    #[test]
    fn test_grades_for_unknown_subject_ignored() {
        let subjects = vec![subject(1, "MATH", "Mathématiques", 2.0)];
        // 科目 99 已被删除，残留成绩不应出现
        let entries = vec![(1, 12.0), (99, 20.0)];
        let transcript = compute_transcript(&subjects, &entries);
        assert_eq!(transcript.rows.len(), 1);
        assert_eq!(transcript.global_average, Some(12.0));
    }
}
