//! Academy catalog: the mock dataset standing in for a backend.
//!
//! Built once at startup and never mutated. Lookups return `Option` and the
//! session layer turns a miss into a typed transition error.

use danceverse_model::{
    Analytics, Batch, BatchId, ContactInfo, Course, CourseId, Difficulty, Lesson, LiveSession,
    LiveStatus, Module,
};

/// Placeholder HLS stream used for every lesson until real uploads exist
pub const DEMO_STREAM_URL: &str = "https://test-streams.mux.dev/x36xhzz/x36xhzz.m3u8";

/// Read-only academy data.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    courses: Vec<Course>,
    batches: Vec<Batch>,
    live_sessions: Vec<LiveSession>,
    analytics: Analytics,
    contact: ContactInfo,
}

impl Catalog {
    pub fn new(
        courses: Vec<Course>,
        batches: Vec<Batch>,
        live_sessions: Vec<LiveSession>,
        analytics: Analytics,
        contact: ContactInfo,
    ) -> Self {
        Self {
            courses,
            batches,
            live_sessions,
            analytics,
            contact,
        }
    }

    /// The Lakshya Danceverse launch catalog.
    pub fn academy() -> Self {
        Self::new(
            academy_courses(),
            academy_batches(),
            academy_live_sessions(),
            Analytics {
                revenue: 0,
                active_users: 540,
                completion_rate: 72,
                top_performing_course: "Fitness & Flow".to_string(),
            },
            ContactInfo {
                phone1: "+91 7007901592".to_string(),
                phone2: "+91 9236596740".to_string(),
                location: "Lucknow".to_string(),
                founder: "Ayush Srivastava".to_string(),
                trainer: "Alex K".to_string(),
            },
        )
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn course(&self, id: &CourseId) -> Option<&Course> {
        self.courses.iter().find(|c| &c.id == id)
    }

    /// Batches are academy-wide: every course offers every batch.
    pub fn batches(&self) -> &[Batch] {
        &self.batches
    }

    pub fn batch(&self, id: &BatchId) -> Option<&Batch> {
        self.batches.iter().find(|b| &b.id == id)
    }

    pub fn live_sessions(&self) -> &[LiveSession] {
        &self.live_sessions
    }

    /// Sessions currently streaming
    pub fn live_now(&self) -> impl Iterator<Item = &LiveSession> {
        self.live_sessions
            .iter()
            .filter(|s| s.status == LiveStatus::Live)
    }

    /// Sessions scheduled but not started
    pub fn upcoming(&self) -> impl Iterator<Item = &LiveSession> {
        self.live_sessions
            .iter()
            .filter(|s| s.status == LiveStatus::Upcoming)
    }

    pub fn analytics(&self) -> &Analytics {
        &self.analytics
    }

    pub fn contact(&self) -> &ContactInfo {
        &self.contact
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::academy()
    }
}

fn academy_courses() -> Vec<Course> {
    vec![
        Course {
            id: CourseId::from("c1"),
            title: "Hip Hop Fundamentals".to_string(),
            description: "Master the basic grooves, isolations, and historical context of Hip Hop culture with Alex K.".to_string(),
            instructor_id: "t1".to_string(),
            instructor_name: "Alex K".to_string(),
            thumbnail: "https://images.unsplash.com/photo-1535525153412-5a42439a210d?auto=format&fit=crop&w=800&q=80".to_string(),
            category: "Hip Hop".to_string(),
            price: 0,
            rating: 4.8,
            students_count: 1245,
            difficulty: Difficulty::Beginner,
            is_published: true,
            modules: vec![Module {
                id: "m1".to_string(),
                title: "The Foundation".to_string(),
                lessons: vec![
                    Lesson {
                        id: "l1".to_string(),
                        title: "History of the Bounce".to_string(),
                        video_url: DEMO_STREAM_URL.to_string(),
                        duration_secs: 760,
                    },
                    Lesson {
                        id: "l2".to_string(),
                        title: "The Two-Step Variation".to_string(),
                        video_url: DEMO_STREAM_URL.to_string(),
                        duration_secs: 920,
                    },
                ],
            }],
        },
        Course {
            id: CourseId::from("c2"),
            title: "Contemporary Expression".to_string(),
            description: "Explore fluidity and floor work with a focus on emotional dynamics.".to_string(),
            instructor_id: "t2".to_string(),
            instructor_name: "S. Verma".to_string(),
            thumbnail: "https://images.unsplash.com/photo-1508700115892-45ecd05ae2ad?auto=format&fit=crop&w=800&q=80".to_string(),
            category: "Contemporary".to_string(),
            price: 0,
            rating: 4.9,
            students_count: 820,
            difficulty: Difficulty::Intermediate,
            is_published: true,
            modules: Vec::new(),
        },
        Course {
            id: CourseId::from("c3"),
            title: "Fitness & Flow".to_string(),
            description: "Dance-based fitness routines designed for all levels and all ages.".to_string(),
            instructor_id: "t3".to_string(),
            instructor_name: "Ayush Srivastava".to_string(),
            thumbnail: "https://images.unsplash.com/photo-1547153760-18fc86324498?auto=format&fit=crop&w=800&q=80".to_string(),
            category: "Fitness".to_string(),
            price: 0,
            rating: 4.7,
            students_count: 540,
            difficulty: Difficulty::Beginner,
            is_published: true,
            modules: Vec::new(),
        },
    ]
}

fn academy_batches() -> Vec<Batch> {
    vec![
        Batch {
            id: BatchId::from("b-morning"),
            label: "Morning (7–8 AM)".to_string(),
            schedule: "Monday to Friday".to_string(),
        },
        Batch {
            id: BatchId::from("b-evening"),
            label: "Evening (6–7 PM)".to_string(),
            schedule: "Monday to Friday".to_string(),
        },
        Batch {
            id: BatchId::from("b-weekend"),
            label: "Weekend (Sat–Sun, 10–11:30 AM)".to_string(),
            schedule: "Saturday and Sunday".to_string(),
        },
    ]
}

fn academy_live_sessions() -> Vec<LiveSession> {
    vec![LiveSession {
        id: "s1".to_string(),
        title: "Live Workshop: Power Moves".to_string(),
        instructor_id: "t3".to_string(),
        instructor_name: "Alex K".to_string(),
        start_time: chrono::Utc::now().to_rfc3339(),
        duration_minutes: 90,
        category: "Performance".to_string(),
        status: LiveStatus::Live,
    }]
}
