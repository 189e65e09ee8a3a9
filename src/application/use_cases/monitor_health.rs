//! ヘルスモニター
//!
//! 固定間隔でヘルスエンドポイントをプローブし、三値の
//! サーバー状態を watch チャンネルで配信する

use crate::domain::health::repositories::HealthProbe;
use crate::domain::health::value_objects::ServerStatus;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

/// 既定のポーリング間隔（10秒）
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);

pub struct HealthMonitor<P: HealthProbe + 'static> {
    probe: Arc<P>,
    interval: Duration,
    sender: watch::Sender<ServerStatus>,
}

impl<P: HealthProbe + 'static> HealthMonitor<P> {
    pub fn new(probe: Arc<P>, interval: Duration) -> Self {
        let (sender, _) = watch::channel(ServerStatus::Checking);
        Self {
            probe,
            interval,
            sender,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<ServerStatus> {
        self.sender.subscribe()
    }

    /// 一度だけプローブして結果を配信する
    ///
    /// 成功は `Online`、失敗は `Offline`。`Checking` に戻ることはない
    pub async fn probe_once(&self) -> ServerStatus {
        let status = match self.probe.probe().await {
            Ok(report) => {
                debug!(status = ?report.status, "ヘルスチェック成功");
                ServerStatus::Online
            }
            Err(error) => {
                warn!(%error, "ヘルスチェック失敗");
                ServerStatus::Offline
            }
        };
        self.sender.send_replace(status);
        status
    }

    /// 監視タスクを起動する
    ///
    /// 起動直後に一度プローブし、以後は固定間隔で繰り返す。
    /// 返されたハンドルを破棄するとタスクは停止する
    pub fn spawn(self) -> MonitorHandle {
        let receiver = self.sender.subscribe();
        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                self.probe_once().await;
            }
        });
        MonitorHandle { task, receiver }
    }
}

/// 監視タスクのハンドル
pub struct MonitorHandle {
    task: JoinHandle<()>,
    receiver: watch::Receiver<ServerStatus>,
}

impl MonitorHandle {
    /// 現在のサーバー状態
    pub fn status(&self) -> ServerStatus {
        *self.receiver.borrow()
    }

    /// 次の状態配信を待つ
    pub async fn changed(&mut self) -> Result<(), watch::error::RecvError> {
        self.receiver.changed().await
    }

    /// 監視を止める
    pub fn stop(&self) {
        self.task.abort();
    }
}

impl Drop for MonitorHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::StaticHealthProbe;

    #[tokio::test]
    async fn test_initial_state_is_checking() {
        let monitor = HealthMonitor::new(
            Arc::new(StaticHealthProbe::new(true)),
            DEFAULT_POLL_INTERVAL,
        );
        assert_eq!(*monitor.subscribe().borrow(), ServerStatus::Checking);
    }

    #[tokio::test]
    async fn test_probe_resolves_to_online_or_offline() {
        let probe = Arc::new(StaticHealthProbe::new(true));
        let monitor = HealthMonitor::new(probe.clone(), DEFAULT_POLL_INTERVAL);

        assert_eq!(monitor.probe_once().await, ServerStatus::Online);

        probe.set_healthy(false);
        assert_eq!(monitor.probe_once().await, ServerStatus::Offline);

        // 最初のプローブ以降は checking に戻らない
        probe.set_healthy(true);
        assert!(monitor.probe_once().await.is_resolved());
    }

    #[tokio::test(start_paused = true)]
    async fn test_spawned_monitor_publishes_within_one_interval() {
        let probe = Arc::new(StaticHealthProbe::new(true));
        let monitor = HealthMonitor::new(probe.clone(), Duration::from_secs(10));
        let mut handle = monitor.spawn();

        assert_eq!(handle.status(), ServerStatus::Checking);
        handle.changed().await.unwrap();
        assert_eq!(handle.status(), ServerStatus::Online);

        // バックエンドが落ちたら次のプローブで offline に遷移する
        probe.set_healthy(false);
        handle.changed().await.unwrap();
        assert_eq!(handle.status(), ServerStatus::Offline);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_halts_polling() {
        let probe = Arc::new(StaticHealthProbe::new(true));
        let monitor = HealthMonitor::new(probe, Duration::from_secs(10));
        let mut handle = monitor.spawn();

        handle.changed().await.unwrap();
        handle.stop();
        assert!(handle.changed().await.is_err());
    }
}
