use crate::core::booking::compose_payload;
use crate::core::schedule::available_slots;
use crate::core::validator::{parse_date, validate_field};
use crate::core::{
    Clock, Field, FieldErrors, Guests, Notifier, ReservationApi, ReservationRequest,
    SubmissionOutcome, TimeSlot, TouchedSet,
};
use chrono::NaiveDate;

pub const REQUIRED_FIELDS_NOTICE: &str = "Please fill in all required fields";
pub const NO_TIMES_TODAY: &str = "No available times today.";
pub const SLOT_UNAVAILABLE: &str = "That time is no longer available.";

pub const SUBMIT_LABEL: &str = "Submit Reservation Request";
pub const SUBMITTING_LABEL: &str = "Submitting...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStatus {
    /// 已有送出中的請求，這次不做任何事
    Busy,
    /// 驗證沒過，沒有送出請求
    Rejected,
    Completed(SubmissionOutcome),
}

/// 一次訂位表單的狀態：輸入值、touched/錯誤，以及所選日期可訂的時段
pub struct ReservationForm<C: Clock> {
    clock: C,
    request: ReservationRequest,
    touched: TouchedSet,
    errors: FieldErrors,
    time_options: Vec<TimeSlot>,
    loading: bool,
}

impl<C: Clock> ReservationForm<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            request: ReservationRequest::default(),
            touched: TouchedSet::default(),
            errors: FieldErrors::default(),
            time_options: Vec::new(),
            loading: false,
        }
    }

    pub fn request(&self) -> &ReservationRequest {
        &self.request
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn touched(&self) -> &TouchedSet {
        &self.touched
    }

    pub fn time_options(&self) -> &[TimeSlot] {
        &self.time_options
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn submit_label(&self) -> &'static str {
        if self.loading {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    /// 要顯示的錯誤；還沒 blur 過的欄位一律不顯示
    pub fn visible_error(&self, field: Field) -> Option<&'static str> {
        if self.touched.contains(field) {
            self.errors.get(field)
        } else {
            None
        }
    }

    pub fn change(&mut self, field: Field, value: impl Into<String>) {
        *self.request.value_mut(field) = value.into();

        // 換日期就要重新選時間
        if field == Field::Date {
            self.request.time.clear();
            self.time_options.clear();
            self.errors.time = None;
        }

        if self.touched.contains(field) {
            self.validate(field);
        }
    }

    pub fn blur(&mut self, field: Field) {
        self.touched.insert(field);
        self.validate(field);
    }

    pub fn set_guests(&mut self, guests: Guests) {
        self.request.guests = guests;
    }

    pub fn set_newsletter_signup(&mut self, opt_in: bool) {
        self.request.newsletter_signup = opt_in;
    }

    /// 依所選日期重算可訂時段。今天已經沒有時段時，不等 blur 直接設定錯誤
    pub fn open_time_selector(&mut self) -> &[TimeSlot] {
        self.time_options.clear();

        let Some(date) = parse_date(&self.request.date) else {
            return &self.time_options;
        };

        let now = self.clock.now();
        self.time_options = available_slots(date, now);

        if self.time_options.is_empty() && date == now.date_naive() {
            tracing::debug!("No slots left today ({})", now.format("%H:%M"));
            self.touched.insert(Field::Time);
            self.errors.time = Some(NO_TIMES_TODAY);
        }

        &self.time_options
    }

    pub async fn submit<A, N>(&mut self, api: &A, notifier: &N) -> SubmitStatus
    where
        A: ReservationApi + ?Sized,
        N: Notifier + ?Sized,
    {
        if self.loading {
            return SubmitStatus::Busy;
        }

        if !self.validate_for_submit() {
            tracing::warn!("⚠️ Reservation rejected: {:?}", self.errors);
            notifier.error(REQUIRED_FIELDS_NOTICE);
            return SubmitStatus::Rejected;
        }

        // future 中途被丟掉時，guard 的 Drop 也會把 loading 清掉
        let guard = LoadingGuard::engage(&mut self.loading);
        let outcome = Self::send(&self.request, &self.clock, api).await;
        drop(guard);

        if outcome.success {
            tracing::info!("✅ Reservation accepted: {}", outcome.message);
            notifier.success(&outcome.message);
            self.reset();
        } else {
            tracing::warn!("❌ Reservation failed: {}", outcome.message);
            notifier.error(&outcome.message);
        }

        SubmitStatus::Completed(outcome)
    }

    async fn send<A: ReservationApi + ?Sized>(
        request: &ReservationRequest,
        clock: &C,
        api: &A,
    ) -> SubmissionOutcome {
        let payload = match compose_payload(request, clock.now().timezone()) {
            Ok(payload) => payload,
            Err(e) => return SubmissionOutcome::from_error(&e),
        };

        tracing::info!(
            "📨 Submitting reservation for {} guest(s) at {}",
            payload.guests.get(),
            payload.time_slot
        );

        match api.create_reservation(&payload).await {
            Ok(body) => SubmissionOutcome::from_response(&body),
            Err(e) => SubmissionOutcome::from_error(&e),
        }
    }

    fn today(&self) -> NaiveDate {
        self.clock.now().date_naive()
    }

    fn validate(&mut self, field: Field) {
        let error = validate_field(field, self.request.value(field), self.today());
        self.errors.set(field, error);
    }

    fn validate_for_submit(&mut self) -> bool {
        let mut fields = vec![Field::Name, Field::Email, Field::Date, Field::Time];
        if !self.request.phone.trim().is_empty() {
            fields.push(Field::Phone);
        }

        for field in fields {
            self.touched.insert(field);
            self.validate(field);
        }

        if self.errors.is_empty() && !self.slot_still_available() {
            self.errors.time = Some(SLOT_UNAVAILABLE);
        }

        self.errors.is_empty()
    }

    fn slot_still_available(&self) -> bool {
        let (Some(date), Ok(slot)) = (
            parse_date(&self.request.date),
            self.request.time.parse::<TimeSlot>(),
        ) else {
            return false;
        };

        available_slots(date, self.clock.now()).contains(&slot)
    }

    fn reset(&mut self) {
        self.request = ReservationRequest::default();
        self.touched = TouchedSet::default();
        self.errors = FieldErrors::default();
        self.time_options.clear();
    }
}

/// 持有 loading 旗標，離開作用域（包含 future 被取消）時清除
struct LoadingGuard<'a> {
    flag: &'a mut bool,
}

impl<'a> LoadingGuard<'a> {
    fn engage(flag: &'a mut bool) -> Self {
        *flag = true;
        Self { flag }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        *self.flag = false;
    }
}
