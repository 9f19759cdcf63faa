//! Static demo data the screens open with.

use crate::model::{
    Course, CourseLevel, Job, JobType, TaskStatus, TaskType, UserProfile, WorkTask,
};

/// The demo user shown on the assessment screen.
pub fn demo_profile() -> UserProfile {
    UserProfile::new("1", "罗元", 68)
        .with_experience(35)
        .with_skills(["历史档案管理", "冲突调解", "质量控制"])
        .with_scores(40, 75)
}

/// Tasks the workstation opens with.
pub fn seed_tasks() -> Vec<WorkTask> {
    vec![
        WorkTask::new("1", "整理本周客户咨询记录", TaskType::Agent, TaskStatus::Completed, "10:00"),
        WorkTask::new("2", "分析客户情感倾向", TaskType::Human, TaskStatus::InProgress, "10:05"),
        WorkTask::new("3", "生成初步回复草稿", TaskType::Agent, TaskStatus::Pending, "10:15"),
    ]
}

/// Human + agent job postings.
pub fn demo_jobs() -> Vec<Job> {
    vec![
        Job {
            id: "1".into(),
            title: "资深历史档案顾问".into(),
            job_type: JobType::Remote,
            company: "数字文保中心".into(),
            base_salary: "4k-6k".into(),
            equity: "项目分红".into(),
            agent_dependency: 70,
            description: "负责指导 AI 整理历史文献，利用您的经验审核 AI 输出的关键错误。".into(),
            tags: vec!["远程".into(), "经验优先".into()],
        },
        Job {
            id: "2".into(),
            title: "智慧养老咨询师".into(),
            job_type: JobType::Consultant,
            company: "夕阳红科技".into(),
            base_salary: "300/小时".into(),
            equity: "期权激励".into(),
            agent_dependency: 50,
            description: "协同 AI 客服处理复杂的家庭矛盾纠纷，提供情感支持。".into(),
            tags: vec!["半天制".into(), "高时薪".into()],
        },
    ]
}

/// Courses on the learning screen.
pub fn demo_courses() -> Vec<Course> {
    vec![
        Course {
            id: "1".into(),
            title: "Agent 基础语音交互".into(),
            duration: "15 分钟".into(),
            progress: 0,
            level: CourseLevel::Beginner,
        },
        Course {
            id: "2".into(),
            title: "远程会议软件使用".into(),
            duration: "30 分钟".into(),
            progress: 0,
            level: CourseLevel::Intermediate,
        },
    ]
}
