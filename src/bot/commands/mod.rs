pub mod debug;
pub mod notifications;
pub mod schedule;
pub mod subjects;

use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone)]
#[command(rename_rule = "snake_case", description = "Команди бота розкладу:")]
pub enum Command {
    #[command(description = "відкрити меню")]
    Start,
    #[command(description = "показати це повідомлення")]
    Help,
    #[command(description = "розклад на сьогодні")]
    Today,
    #[command(description = "розклад на завтра")]
    Tomorrow,
    #[command(description = "розклад на тиждень")]
    Week,
    #[command(description = "розклад на наступний тиждень")]
    NextWeek,
    #[command(description = "розклад на дату, напр. /date 25.09.2025")]
    Date { date: String },
    #[command(description = "розклад по предмету; без аргументу відкриє список")]
    Subject { name: String },
    #[command(description = "найближчі пари")]
    Next,
    #[command(description = "підключити сповіщення")]
    NotifyOn,
    #[command(description = "відключити сповіщення")]
    NotifyOff,
    #[command(description = "діагностика таблиці")]
    Debug,
}
