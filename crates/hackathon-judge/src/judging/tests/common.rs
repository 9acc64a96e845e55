use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::judging::{
    Judge, JudgingConfig, JudgingProfile, JudgingState, ProfileHandle, ScoreResult, Submission,
};

pub(super) fn default_profile() -> Arc<JudgingProfile> {
    Arc::new(JudgingProfile::from_config(JudgingConfig::default()).expect("defaults are valid"))
}

pub(super) fn judge() -> Judge {
    Judge::new(default_profile())
}

pub(super) fn profile_handle() -> ProfileHandle {
    ProfileHandle::new(
        JudgingProfile::from_config(JudgingConfig::default()).expect("defaults are valid"),
    )
}

pub(super) fn judging_state(handle: &ProfileHandle) -> JudgingState {
    JudgingState::new(handle.clone())
}

pub(super) fn evaluate(submission: &Submission) -> ScoreResult {
    judge().evaluate(submission).expect("submission evaluates")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1 << 20)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

/// Specific, evidence-backed write-up with a working demo link.
pub(super) fn care_queue() -> Submission {
    Submission {
        title: "CareQueue".to_string(),
        team_size: 4,
        problem_statement: "Rural clinics struggle with patient intake. Nurses spend 3 hours per \
            shift on manual paperwork, and the process is error-prone and costly. A 2023 survey \
            of 120 clinics found that patients wait 45 minutes on average before triage. These \
            delays are frustrating for patients and a serious challenge for small healthcare \
            teams with limited staff. Missed follow-ups lead to readmissions that cost each \
            clinic thousands of dollars every year."
            .to_string(),
        solution_description: "CareQueue is a tablet intake app backed by a REST API and a \
            PostgreSQL database. Our triage algorithm ranks patients by symptom severity and \
            wait time, and a WebSocket channel pushes real-time queue updates to the nurse \
            dashboard. The architecture keeps caching in Redis so queue reads stay under 200 ms \
            latency. We built the MVP in 36 hours, tested it with 14 nurses, and deployed the \
            prototype to a pilot clinic where it handled 50 requests per second on a single \
            container. Authentication and authorization use clinic-issued badges, and patient \
            records use encryption at rest. The README and API documentation cover setup. The \
            user interface went through Figma wireframes and a usability session; the layout is \
            responsive, works with a screen reader, and offers a high contrast mode."
            .to_string(),
        tech_stack: "React, TypeScript, Tailwind, Node.js, Express, PostgreSQL, Redis, Docker, \
            AWS, WebSocket"
            .to_string(),
        innovation_description: "Unlike existing queue kiosks that only record arrival order, \
            CareQueue combines symptom-based triage with live staff availability. Compared to \
            paper sign-in sheets, nurses see a ranked queue instead of a clipboard. This hybrid \
            approach is a new method for small clinics: triage rules run on the tablet, so the \
            queue keeps working during network outages. In our pilot it cut average wait time \
            by 40%."
            .to_string(),
        repository_link: "https://github.com/carequeue/carequeue".to_string(),
        demo_link: Some("https://carequeue.example.org/demo".to_string()),
        target_users: "Nurses and intake staff at rural clinics and community hospitals, clinic \
            administrators who manage patient flow, and patients who need faster triage. Our \
            pilot partners are two county healthcare networks serving 8,000 patients."
            .to_string(),
        future_scope: "Next we will add an integration with electronic health records through \
            webhooks and a plugin system so clinics can add modular intake forms. To scale \
            beyond 50 clinics we plan autoscaling containers behind a load balancer, with \
            database replication across two regions. A subscription of $40 per clinic each \
            month covers hosting, and grant revenue from rural health programs keeps it free \
            for nonprofits. Over a 12 month pilot we aim for better outcomes: shorter waits \
            help staff focus on care and improve access for the community."
            .to_string(),
    }
}

/// Same write-up as [`care_queue`] without a demo link.
pub(super) fn care_queue_without_demo() -> Submission {
    Submission {
        demo_link: None,
        ..care_queue()
    }
}

/// Buzzword and overclaim heavy pitch with no concrete claims.
pub(super) fn synergy_verse() -> Submission {
    Submission {
        title: "SynergyVerse".to_string(),
        team_size: 2,
        problem_statement: "The world needs a revolutionary, game-changing paradigm shift. \
            Everything is broken and nobody has fixed it."
            .to_string(),
        solution_description: "SynergyVerse is a disruptive, cutting-edge, AI-powered, \
            blockchain-enabled platform that will revolutionize everything. Our groundbreaking, \
            next-generation ecosystem offers seamless synergy and holistic, transformative \
            value. It is the first ever world-class solution and is guaranteed to succeed."
            .to_string(),
        tech_stack: "Cutting-edge, state-of-the-art, cloud-native, enterprise-grade technology"
            .to_string(),
        innovation_description: "Completely unique and unparalleled. It has never been done \
            before and has no competition. This is a breakthrough, pioneering, trailblazing, \
            bleeding-edge innovation."
            .to_string(),
        repository_link: "https://github.com/synergyverse/app".to_string(),
        demo_link: None,
        target_users: "Everyone will use it.".to_string(),
        future_scope: "It will change the world with viral growth, hockey stick growth, and \
            unicorn potential as a billion dollar, industry-leading, best-in-class, \
            future-proof, mission-critical, world-changing company."
            .to_string(),
    }
}

/// Plain, honest write-up with little detail and no markers.
pub(super) fn study_buddy() -> Submission {
    Submission {
        title: "StudyBuddy".to_string(),
        team_size: 1,
        problem_statement: "Students find it hard to plan revision before exams.".to_string(),
        solution_description: "A planner that turns a syllabus into a weekly revision \
            schedule. We built a prototype with a simple calendar view."
            .to_string(),
        tech_stack: "Python, Flask".to_string(),
        innovation_description: "The planner reads the syllabus order instead of asking \
            students to enter every topic by hand."
            .to_string(),
        repository_link: "https://github.com/studybuddy/planner".to_string(),
        demo_link: Some("https://studybuddy.example.com".to_string()),
        target_users: "High school students preparing for final exams.".to_string(),
        future_scope: "Add reminders and a mobile layout.".to_string(),
    }
}
