//! 预导入模块，方便使用

pub use super::attendances::{
    ActiveModel as AttendanceActiveModel, Entity as Attendances, Model as AttendanceModel,
};
pub use super::homework_submissions::{
    ActiveModel as HomeworkSubmissionActiveModel, Entity as HomeworkSubmissions,
    Model as HomeworkSubmissionModel,
};
pub use super::homeworks::{
    ActiveModel as HomeworkActiveModel, Entity as Homeworks, Model as HomeworkModel,
};
pub use super::lesson_videos::{
    ActiveModel as LessonVideoActiveModel, Entity as LessonVideos, Model as LessonVideoModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
