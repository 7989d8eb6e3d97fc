//! Hand-authored override tables, one `const` per locale.
//!
//! Keys are dot-joined paths into the reference document. Four locales
//! (fr, es, ko, ar) are fully translated; the rest cover the most visible
//! UI strings and fall back to English for everything else.

/// Simplified Chinese, common UI strings only.
pub(super) const ZH_HANS: &[(&str, &str)] = &[
    ("app.name", "PipBox"),
    ("app.tagline", "您的生产力伙伴"),
    ("timer.play", "播放"),
    ("timer.pause", "暂停"),
    ("timer.stop", "停止"),
    ("timer.reset", "重置"),
    ("settings.title", "设置"),
    ("settings.language", "语言"),
    ("common.ok", "确定"),
    ("common.cancel", "取消"),
    ("common.save", "保存"),
];

/// Traditional Chinese, common UI strings only.
pub(super) const ZH_HANT: &[(&str, &str)] = &[
    ("app.name", "PipBox"),
    ("app.tagline", "您的生產力夥伴"),
    ("timer.play", "播放"),
    ("timer.pause", "暫停"),
    ("timer.stop", "停止"),
    ("timer.reset", "重置"),
    ("settings.title", "設定"),
    ("settings.language", "語言"),
    ("common.ok", "確定"),
    ("common.cancel", "取消"),
    ("common.save", "儲存"),
];

/// Japanese, common UI strings only.
pub(super) const JA: &[(&str, &str)] = &[
    ("app.name", "PipBox"),
    ("app.tagline", "あなたの生産性パートナー"),
    ("timer.play", "再生"),
    ("timer.pause", "一時停止"),
    ("timer.stop", "停止"),
    ("timer.reset", "リセット"),
    ("settings.title", "設定"),
    ("settings.language", "言語"),
    ("common.ok", "OK"),
    ("common.cancel", "キャンセル"),
    ("common.save", "保存"),
];

/// German, common UI strings only.
pub(super) const DE: &[(&str, &str)] = &[
    ("app.name", "PipBox"),
    ("app.tagline", "Ihr Produktivitätsbegleiter"),
    ("timer.play", "Abspielen"),
    ("timer.pause", "Pause"),
    ("timer.stop", "Stopp"),
    ("timer.reset", "Zurücksetzen"),
    ("settings.title", "Einstellungen"),
    ("settings.language", "Sprache"),
    ("common.ok", "OK"),
    ("common.cancel", "Abbrechen"),
    ("common.save", "Speichern"),
];

/// French, complete translation.
pub(super) const FR: &[(&str, &str)] = &[
    ("app.name", "PipBox"),
    ("app.tagline", "Votre compagnon de productivité"),
    ("timer.play", "Lecture"),
    ("timer.pause", "Pause"),
    ("timer.stop", "Arrêt"),
    ("timer.reset", "Réinitialiser"),
    ("timer.hours", "Heures"),
    ("timer.minutes", "Minutes"),
    ("timer.seconds", "Secondes"),
    ("timer.setDuration", "Définir la durée"),
    ("timer.enterDuration", "Entrer la durée (HH:MM:SS ou minutes)"),
    ("timer.presets", "Préréglages rapides"),
    ("timer.customTime", "Temps personnalisé"),
    ("timer.focusTime", "Temps de concentration"),
    ("timer.breakTime", "Temps de pause"),
    ("timer.pomodoroWork", "Travail Pomodoro"),
    ("timer.pomodoroBreak", "Pause Pomodoro"),
    ("settings.title", "Paramètres"),
    ("settings.general", "Général"),
    ("settings.language", "Langue"),
    ("settings.notifications", "Notifications"),
    ("settings.sounds", "Sons"),
    ("settings.appearance", "Apparence"),
    ("settings.about", "À propos"),
    ("settings.version", "Version"),
    ("settings.selectLanguage", "Sélectionner la langue"),
    ("settings.enableNotifications", "Activer les notifications"),
    ("settings.enableSounds", "Activer les sons"),
    ("settings.soundVolume", "Volume sonore"),
    ("settings.theme", "Thème"),
    ("settings.darkMode", "Mode sombre"),
    ("settings.lightMode", "Mode clair"),
    ("settings.systemDefault", "Valeur par défaut du système"),
    ("onboarding.welcome", "Bienvenue sur PipBox"),
    (
        "onboarding.welcomeMessage",
        "Votre compagnon minimaliste de productivité pour des sessions de travail concentrées",
    ),
    ("onboarding.next", "Suivant"),
    ("onboarding.skip", "Passer"),
    ("onboarding.getStarted", "Commencer"),
    ("onboarding.finish", "Terminer"),
    ("onboarding.step1Title", "Régler le minuteur"),
    (
        "onboarding.step1Description",
        "Cliquez sur le minuteur pour définir votre durée de concentration. Utilisez les préréglages ou entrez un temps personnalisé.",
    ),
    ("onboarding.step2Title", "Concentration et flux"),
    (
        "onboarding.step2Description",
        "Commencez votre session et laissez la fourmi guider votre progression du début à la fin.",
    ),
    ("onboarding.step3Title", "Technique Pomodoro"),
    (
        "onboarding.step3Description",
        "Travaillez par intervalles concentrés de 25 minutes avec des pauses de 5 minutes. Prenez une pause plus longue après 4 sessions.",
    ),
    ("onboarding.step4Title", "Suivre vos progrès"),
    (
        "onboarding.step4Description",
        "Regardez la fourmi traverser l'écran au fur et à mesure de votre session. Restez motivé!",
    ),
    ("onboarding.step5Title", "Notifications"),
    (
        "onboarding.step5Description",
        "Soyez averti lorsque votre session se termine avec un son et des notifications système.",
    ),
    ("onboarding.step6Title", "Prêt à se concentrer"),
    (
        "onboarding.step6Description",
        "Vous êtes prêt! Commencez votre première session et augmentez votre productivité.",
    ),
    ("notification.timeUp", "Temps écoulé!"),
    ("notification.sessionComplete", "Votre session de concentration est terminée"),
    ("notification.breakComplete", "Le temps de pause est terminé"),
    ("notification.takeABreak", "C'est l'heure de la pause!"),
    (
        "notification.workSessionComplete",
        "Session de travail terminée. C'est l'heure d'une pause de {duration} minutes.",
    ),
    ("menu.file", "Fichier"),
    ("menu.edit", "Éditer"),
    ("menu.view", "Affichage"),
    ("menu.window", "Fenêtre"),
    ("menu.help", "Aide"),
    ("menu.quit", "Quitter PipBox"),
    ("menu.preferences", "Préférences"),
    ("menu.about", "À propos de PipBox"),
    ("menu.minimize", "Réduire"),
    ("menu.close", "Fermer"),
    ("common.ok", "OK"),
    ("common.cancel", "Annuler"),
    ("common.save", "Enregistrer"),
    ("common.delete", "Supprimer"),
    ("common.edit", "Éditer"),
    ("common.done", "Terminé"),
    ("common.close", "Fermer"),
    ("common.back", "Retour"),
    ("common.continue", "Continuer"),
    ("common.confirm", "Confirmer"),
    ("common.yes", "Oui"),
    ("common.no", "Non"),
    ("errors.invalidTime", "Format de temps invalide"),
    ("errors.genericError", "Une erreur s'est produite. Veuillez réessayer."),
    ("errors.notificationPermission", "Permission de notification refusée"),
];

/// Spanish, complete translation.
pub(super) const ES: &[(&str, &str)] = &[
    ("app.name", "PipBox"),
    ("app.tagline", "Tu compañero de productividad"),
    ("timer.play", "Reproducir"),
    ("timer.pause", "Pausa"),
    ("timer.stop", "Detener"),
    ("timer.reset", "Restablecer"),
    ("timer.hours", "Horas"),
    ("timer.minutes", "Minutos"),
    ("timer.seconds", "Segundos"),
    ("timer.setDuration", "Establecer duración"),
    ("timer.enterDuration", "Ingrese duración (HH:MM:SS o minutos)"),
    ("timer.presets", "Ajustes rápidos"),
    ("timer.customTime", "Tiempo personalizado"),
    ("timer.focusTime", "Tiempo de concentración"),
    ("timer.breakTime", "Tiempo de descanso"),
    ("timer.pomodoroWork", "Trabajo Pomodoro"),
    ("timer.pomodoroBreak", "Descanso Pomodoro"),
    ("settings.title", "Configuración"),
    ("settings.general", "General"),
    ("settings.language", "Idioma"),
    ("settings.notifications", "Notificaciones"),
    ("settings.sounds", "Sonidos"),
    ("settings.appearance", "Apariencia"),
    ("settings.about", "Acerca de"),
    ("settings.version", "Versión"),
    ("settings.selectLanguage", "Seleccionar idioma"),
    ("settings.enableNotifications", "Habilitar notificaciones"),
    ("settings.enableSounds", "Habilitar sonidos"),
    ("settings.soundVolume", "Volumen de sonido"),
    ("settings.theme", "Tema"),
    ("settings.darkMode", "Modo oscuro"),
    ("settings.lightMode", "Modo claro"),
    ("settings.systemDefault", "Predeterminado del sistema"),
    ("onboarding.welcome", "Bienvenido a PipBox"),
    (
        "onboarding.welcomeMessage",
        "Tu compañero minimalista de productividad para sesiones de trabajo enfocadas",
    ),
    ("onboarding.next", "Siguiente"),
    ("onboarding.skip", "Saltar"),
    ("onboarding.getStarted", "Comenzar"),
    ("onboarding.finish", "Terminar"),
    ("onboarding.step1Title", "Configura tu temporizador"),
    (
        "onboarding.step1Description",
        "Haz clic en el temporizador para establecer tu duración de concentración. Usa ajustes preestablecidos o ingresa un tiempo personalizado.",
    ),
    ("onboarding.step2Title", "Concentración y flujo"),
    (
        "onboarding.step2Description",
        "Comienza tu sesión y deja que la hormiga guíe tu progreso de principio a fin.",
    ),
    ("onboarding.step3Title", "Técnica Pomodoro"),
    (
        "onboarding.step3Description",
        "Trabaja en intervalos enfocados de 25 minutos con descansos de 5 minutos. Toma un descanso más largo después de 4 sesiones.",
    ),
    ("onboarding.step4Title", "Rastrea tu progreso"),
    (
        "onboarding.step4Description",
        "Observa a la hormiga recorrer la pantalla a medida que avanza tu sesión. ¡Mantente motivado!",
    ),
    ("onboarding.step5Title", "Notificaciones"),
    (
        "onboarding.step5Description",
        "Recibe notificaciones cuando tu sesión se complete con sonido y notificaciones del sistema.",
    ),
    ("onboarding.step6Title", "Listo para concentrarse"),
    (
        "onboarding.step6Description",
        "¡Todo listo! Comienza tu primera sesión y aumenta tu productividad.",
    ),
    ("notification.timeUp", "¡Se acabó el tiempo!"),
    ("notification.sessionComplete", "Tu sesión de concentración está completa"),
    ("notification.breakComplete", "El tiempo de descanso ha terminado"),
    ("notification.takeABreak", "¡Hora de un descanso!"),
    (
        "notification.workSessionComplete",
        "Sesión de trabajo completa. Hora de un descanso de {duration} minutos.",
    ),
    ("menu.file", "Archivo"),
    ("menu.edit", "Editar"),
    ("menu.view", "Ver"),
    ("menu.window", "Ventana"),
    ("menu.help", "Ayuda"),
    ("menu.quit", "Salir de PipBox"),
    ("menu.preferences", "Preferencias"),
    ("menu.about", "Acerca de PipBox"),
    ("menu.minimize", "Minimizar"),
    ("menu.close", "Cerrar"),
    ("common.ok", "Aceptar"),
    ("common.cancel", "Cancelar"),
    ("common.save", "Guardar"),
    ("common.delete", "Eliminar"),
    ("common.edit", "Editar"),
    ("common.done", "Hecho"),
    ("common.close", "Cerrar"),
    ("common.back", "Atrás"),
    ("common.continue", "Continuar"),
    ("common.confirm", "Confirmar"),
    ("common.yes", "Sí"),
    ("common.no", "No"),
    ("errors.invalidTime", "Formato de tiempo inválido"),
    ("errors.genericError", "Algo salió mal. Por favor, inténtalo de nuevo."),
    ("errors.notificationPermission", "Permiso de notificación denegado"),
];

/// Korean, complete translation.
pub(super) const KO: &[(&str, &str)] = &[
    ("app.name", "PipBox"),
    ("app.tagline", "당신의 생산성 동반자"),
    ("timer.play", "재생"),
    ("timer.pause", "일시정지"),
    ("timer.stop", "정지"),
    ("timer.reset", "초기화"),
    ("timer.hours", "시간"),
    ("timer.minutes", "분"),
    ("timer.seconds", "초"),
    ("timer.setDuration", "시간 설정"),
    ("timer.enterDuration", "시간 입력 (HH:MM:SS 또는 분)"),
    ("timer.presets", "빠른 설정"),
    ("timer.customTime", "사용자 지정 시간"),
    ("timer.focusTime", "집중 시간"),
    ("timer.breakTime", "휴식 시간"),
    ("timer.pomodoroWork", "뽀모도로 작업"),
    ("timer.pomodoroBreak", "뽀모도로 휴식"),
    ("settings.title", "설정"),
    ("settings.general", "일반"),
    ("settings.language", "언어"),
    ("settings.notifications", "알림"),
    ("settings.sounds", "소리"),
    ("settings.appearance", "모양"),
    ("settings.about", "정보"),
    ("settings.version", "버전"),
    ("settings.selectLanguage", "언어 선택"),
    ("settings.enableNotifications", "알림 활성화"),
    ("settings.enableSounds", "소리 활성화"),
    ("settings.soundVolume", "음량"),
    ("settings.theme", "테마"),
    ("settings.darkMode", "다크 모드"),
    ("settings.lightMode", "라이트 모드"),
    ("settings.systemDefault", "시스템 기본값"),
    ("onboarding.welcome", "PipBox에 오신 것을 환영합니다"),
    ("onboarding.welcomeMessage", "집중 작업 세션을 위한 미니멀한 생산성 동반자"),
    ("onboarding.next", "다음"),
    ("onboarding.skip", "건너뛰기"),
    ("onboarding.getStarted", "시작하기"),
    ("onboarding.finish", "완료"),
    ("onboarding.step1Title", "타이머 설정"),
    (
        "onboarding.step1Description",
        "타이머를 클릭하여 집중 시간을 설정하세요. 프리셋을 사용하거나 사용자 지정 시간을 입력하세요.",
    ),
    ("onboarding.step2Title", "집중과 흐름"),
    (
        "onboarding.step2Description",
        "세션을 시작하고 개미가 처음부터 끝까지 진행 상황을 안내하도록 하세요.",
    ),
    ("onboarding.step3Title", "뽀모도로 기법"),
    (
        "onboarding.step3Description",
        "25분 집중 간격으로 작업하고 5분 휴식을 취하세요. 4회 후 더 긴 휴식을 취하세요.",
    ),
    ("onboarding.step4Title", "진행 상황 추적"),
    (
        "onboarding.step4Description",
        "세션이 진행됨에 따라 화면을 가로지르는 개미를 보면서 동기를 유지하세요!",
    ),
    ("onboarding.step5Title", "알림"),
    (
        "onboarding.step5Description",
        "세션이 완료되면 사운드 및 시스템 알림으로 알려드립니다.",
    ),
    ("onboarding.step6Title", "집중 준비 완료"),
    (
        "onboarding.step6Description",
        "모든 준비가 완료되었습니다! 첫 번째 세션을 시작하여 생산성을 높이세요.",
    ),
    ("notification.timeUp", "시간 종료!"),
    ("notification.sessionComplete", "집중 세션이 완료되었습니다"),
    ("notification.breakComplete", "휴식 시간이 끝났습니다"),
    ("notification.takeABreak", "휴식 시간입니다!"),
    ("notification.workSessionComplete", "작업 세션 완료. {duration}분 휴식 시간입니다."),
    ("menu.file", "파일"),
    ("menu.edit", "편집"),
    ("menu.view", "보기"),
    ("menu.window", "창"),
    ("menu.help", "도움말"),
    ("menu.quit", "PipBox 종료"),
    ("menu.preferences", "환경설정"),
    ("menu.about", "PipBox 정보"),
    ("menu.minimize", "최소화"),
    ("menu.close", "닫기"),
    ("common.ok", "확인"),
    ("common.cancel", "취소"),
    ("common.save", "저장"),
    ("common.delete", "삭제"),
    ("common.edit", "편집"),
    ("common.done", "완료"),
    ("common.close", "닫기"),
    ("common.back", "뒤로"),
    ("common.continue", "계속"),
    ("common.confirm", "확인"),
    ("common.yes", "예"),
    ("common.no", "아니오"),
    ("errors.invalidTime", "잘못된 시간 형식"),
    ("errors.genericError", "문제가 발생했습니다. 다시 시도해 주세요."),
    ("errors.notificationPermission", "알림 권한이 거부되었습니다"),
];

/// Arabic, complete translation.
pub(super) const AR: &[(&str, &str)] = &[
    ("app.name", "PipBox"),
    ("app.tagline", "رفيقك في الإنتاجية"),
    ("timer.play", "تشغيل"),
    ("timer.pause", "إيقاف مؤقت"),
    ("timer.stop", "إيقاف"),
    ("timer.reset", "إعادة تعيين"),
    ("timer.hours", "ساعات"),
    ("timer.minutes", "دقائق"),
    ("timer.seconds", "ثواني"),
    ("timer.setDuration", "تعيين المدة"),
    ("timer.enterDuration", "أدخل المدة (HH:MM:SS أو دقائق)"),
    ("timer.presets", "إعدادات سريعة"),
    ("timer.customTime", "وقت مخصص"),
    ("timer.focusTime", "وقت التركيز"),
    ("timer.breakTime", "وقت الاستراحة"),
    ("timer.pomodoroWork", "عمل بومودورو"),
    ("timer.pomodoroBreak", "استراحة بومودورو"),
    ("settings.title", "الإعدادات"),
    ("settings.general", "عام"),
    ("settings.language", "اللغة"),
    ("settings.notifications", "الإشعارات"),
    ("settings.sounds", "الأصوات"),
    ("settings.appearance", "المظهر"),
    ("settings.about", "حول"),
    ("settings.version", "الإصدار"),
    ("settings.selectLanguage", "اختر اللغة"),
    ("settings.enableNotifications", "تفعيل الإشعارات"),
    ("settings.enableSounds", "تفعيل الأصوات"),
    ("settings.soundVolume", "مستوى الصوت"),
    ("settings.theme", "السمة"),
    ("settings.darkMode", "الوضع الداكن"),
    ("settings.lightMode", "الوضع الفاتح"),
    ("settings.systemDefault", "افتراضي النظام"),
    ("onboarding.welcome", "مرحباً بك في PipBox"),
    ("onboarding.welcomeMessage", "رفيقك البسيط في الإنتاجية لجلسات العمل المركزة"),
    ("onboarding.next", "التالي"),
    ("onboarding.skip", "تخطي"),
    ("onboarding.getStarted", "ابدأ"),
    ("onboarding.finish", "إنهاء"),
    ("onboarding.step1Title", "اضبط المؤقت"),
    (
        "onboarding.step1Description",
        "انقر على المؤقت لتعيين مدة التركيز. استخدم الإعدادات المسبقة أو أدخل وقتاً مخصصاً.",
    ),
    ("onboarding.step2Title", "التركيز والانسياب"),
    (
        "onboarding.step2Description",
        "ابدأ جلستك ودع النملة تُرشدك من البداية إلى النهاية.",
    ),
    ("onboarding.step3Title", "تقنية بومودورو"),
    (
        "onboarding.step3Description",
        "اعمل بفترات مركزة مدة 25 دقيقة مع استراحات 5 دقائق. خذ استراحة أطول بعد 4 جلسات.",
    ),
    ("onboarding.step4Title", "تتبع تقدمك"),
    (
        "onboarding.step4Description",
        "شاهد النملة تعبر الشاشة مع تقدم جلستك. ابقَ متحفزاً!",
    ),
    ("onboarding.step5Title", "الإشعارات"),
    (
        "onboarding.step5Description",
        "احصل على إشعار عند اكتمال جلستك بصوت وإشعارات النظام.",
    ),
    ("onboarding.step6Title", "جاهز للتركيز"),
    ("onboarding.step6Description", "أنت جاهز! ابدأ جلستك الأولى وعزز إنتاجيتك."),
    ("notification.timeUp", "انتهى الوقت!"),
    ("notification.sessionComplete", "اكتملت جلسة التركيز"),
    ("notification.breakComplete", "انتهى وقت الاستراحة"),
    ("notification.takeABreak", "حان وقت الاستراحة!"),
    (
        "notification.workSessionComplete",
        "اكتملت جلسة العمل. حان وقت استراحة {duration} دقيقة.",
    ),
    ("menu.file", "ملف"),
    ("menu.edit", "تحرير"),
    ("menu.view", "عرض"),
    ("menu.window", "نافذة"),
    ("menu.help", "مساعدة"),
    ("menu.quit", "إنهاء PipBox"),
    ("menu.preferences", "التفضيلات"),
    ("menu.about", "حول PipBox"),
    ("menu.minimize", "تصغير"),
    ("menu.close", "إغلاق"),
    ("common.ok", "موافق"),
    ("common.cancel", "إلغاء"),
    ("common.save", "حفظ"),
    ("common.delete", "حذف"),
    ("common.edit", "تحرير"),
    ("common.done", "تم"),
    ("common.close", "إغلاق"),
    ("common.back", "رجوع"),
    ("common.continue", "متابعة"),
    ("common.confirm", "تأكيد"),
    ("common.yes", "نعم"),
    ("common.no", "لا"),
    ("errors.invalidTime", "تنسيق وقت غير صالح"),
    ("errors.genericError", "حدث خطأ ما. يرجى المحاولة مرة أخرى."),
    ("errors.notificationPermission", "تم رفض إذن الإشعارات"),
];

/// Brazilian Portuguese, common UI strings only.
pub(super) const PT_BR: &[(&str, &str)] = &[
    ("app.name", "PipBox"),
    ("app.tagline", "Seu companheiro de produtividade"),
    ("timer.play", "Reproduzir"),
    ("timer.pause", "Pausar"),
    ("timer.stop", "Parar"),
    ("timer.reset", "Redefinir"),
    ("settings.title", "Configurações"),
    ("settings.language", "Idioma"),
    ("common.ok", "OK"),
    ("common.cancel", "Cancelar"),
    ("common.save", "Salvar"),
];

/// European Portuguese, common UI strings only.
pub(super) const PT_PT: &[(&str, &str)] = &[
    ("app.name", "PipBox"),
    ("app.tagline", "O seu companheiro de produtividade"),
    ("timer.play", "Reproduzir"),
    ("timer.pause", "Pausar"),
    ("timer.stop", "Parar"),
    ("timer.reset", "Redefinir"),
    ("settings.title", "Definições"),
    ("settings.language", "Idioma"),
    ("common.ok", "OK"),
    ("common.cancel", "Cancelar"),
    ("common.save", "Guardar"),
];

/// Hindi, common UI strings only.
pub(super) const HI: &[(&str, &str)] = &[
    ("app.name", "PipBox"),
    ("app.tagline", "आपका उत्पादकता साथी"),
    ("timer.play", "चलाएं"),
    ("timer.pause", "रोकें"),
    ("timer.stop", "बंद करें"),
    ("timer.reset", "रीसेट करें"),
    ("settings.title", "सेटिंग्स"),
    ("settings.language", "भाषा"),
    ("common.ok", "ठीक है"),
    ("common.cancel", "रद्द करें"),
    ("common.save", "सहेजें"),
];

/// Italian, common UI strings only.
pub(super) const IT: &[(&str, &str)] = &[
    ("app.name", "PipBox"),
    ("app.tagline", "Il tuo compagno di produttività"),
    ("timer.play", "Riproduci"),
    ("timer.pause", "Pausa"),
    ("timer.stop", "Stop"),
    ("timer.reset", "Ripristina"),
    ("settings.title", "Impostazioni"),
    ("settings.language", "Lingua"),
    ("common.ok", "OK"),
    ("common.cancel", "Annulla"),
    ("common.save", "Salva"),
];

/// Dutch, common UI strings only.
pub(super) const NL: &[(&str, &str)] = &[
    ("app.name", "PipBox"),
    ("app.tagline", "Uw productiviteitsmetgezel"),
    ("timer.play", "Afspelen"),
    ("timer.pause", "Pauzeren"),
    ("timer.stop", "Stoppen"),
    ("timer.reset", "Resetten"),
    ("settings.title", "Instellingen"),
    ("settings.language", "Taal"),
    ("common.ok", "OK"),
    ("common.cancel", "Annuleren"),
    ("common.save", "Opslaan"),
];

/// Russian, common UI strings only.
pub(super) const RU: &[(&str, &str)] = &[
    ("app.name", "PipBox"),
    ("app.tagline", "Ваш спутник продуктивности"),
    ("timer.play", "Воспроизвести"),
    ("timer.pause", "Пауза"),
    ("timer.stop", "Стоп"),
    ("timer.reset", "Сброс"),
    ("settings.title", "Настройки"),
    ("settings.language", "Язык"),
    ("common.ok", "ОК"),
    ("common.cancel", "Отмена"),
    ("common.save", "Сохранить"),
];

/// Turkish, common UI strings only.
pub(super) const TR: &[(&str, &str)] = &[
    ("app.name", "PipBox"),
    ("app.tagline", "Üretkenlik yardımcınız"),
    ("timer.play", "Oynat"),
    ("timer.pause", "Duraklat"),
    ("timer.stop", "Durdur"),
    ("timer.reset", "Sıfırla"),
    ("settings.title", "Ayarlar"),
    ("settings.language", "Dil"),
    ("common.ok", "Tamam"),
    ("common.cancel", "İptal"),
    ("common.save", "Kaydet"),
];

/// Swedish, common UI strings only.
pub(super) const SV: &[(&str, &str)] = &[
    ("app.name", "PipBox"),
    ("app.tagline", "Din produktivitetspartner"),
    ("timer.play", "Spela"),
    ("timer.pause", "Paus"),
    ("timer.stop", "Stopp"),
    ("timer.reset", "Återställ"),
    ("settings.title", "Inställningar"),
    ("settings.language", "Språk"),
    ("common.ok", "OK"),
    ("common.cancel", "Avbryt"),
    ("common.save", "Spara"),
];

/// Polish, common UI strings only.
pub(super) const PL: &[(&str, &str)] = &[
    ("app.name", "PipBox"),
    ("app.tagline", "Twój towarzysz produktywności"),
    ("timer.play", "Odtwórz"),
    ("timer.pause", "Pauza"),
    ("timer.stop", "Zatrzymaj"),
    ("timer.reset", "Zresetuj"),
    ("settings.title", "Ustawienia"),
    ("settings.language", "Język"),
    ("common.ok", "OK"),
    ("common.cancel", "Anuluj"),
    ("common.save", "Zapisz"),
];

/// Indonesian, common UI strings only.
pub(super) const ID: &[(&str, &str)] = &[
    ("app.name", "PipBox"),
    ("app.tagline", "Teman produktivitas Anda"),
    ("timer.play", "Mainkan"),
    ("timer.pause", "Jeda"),
    ("timer.stop", "Berhenti"),
    ("timer.reset", "Atur Ulang"),
    ("settings.title", "Pengaturan"),
    ("settings.language", "Bahasa"),
    ("common.ok", "OK"),
    ("common.cancel", "Batal"),
    ("common.save", "Simpan"),
];

/// Thai, common UI strings only.
pub(super) const TH: &[(&str, &str)] = &[
    ("app.name", "PipBox"),
    ("app.tagline", "เพื่อนคู่คิดด้านประสิทธิภาพของคุณ"),
    ("timer.play", "เล่น"),
    ("timer.pause", "หยุดชั่วคราว"),
    ("timer.stop", "หยุด"),
    ("timer.reset", "รีเซ็ต"),
    ("settings.title", "การตั้งค่า"),
    ("settings.language", "ภาษา"),
    ("common.ok", "ตกลง"),
    ("common.cancel", "ยกเลิก"),
    ("common.save", "บันทึก"),
];

/// Vietnamese, common UI strings only.
pub(super) const VI: &[(&str, &str)] = &[
    ("app.name", "PipBox"),
    ("app.tagline", "Người bạn đồng hành năng suất của bạn"),
    ("timer.play", "Phát"),
    ("timer.pause", "Tạm dừng"),
    ("timer.stop", "Dừng"),
    ("timer.reset", "Đặt lại"),
    ("settings.title", "Cài đặt"),
    ("settings.language", "Ngôn ngữ"),
    ("common.ok", "OK"),
    ("common.cancel", "Hủy"),
    ("common.save", "Lưu"),
];
